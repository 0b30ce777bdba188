use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{userdb::UserExt, workerdb::WorkerExt},
    dtos::{
        userdtos::RequestQueryDto,
        workerdtos::{CreateWorkerProfileDto, UpdateWorkerProfileDto, WorkerProfileDto},
    },
    error::{ErrorMessage, HttpError},
    AppState,
};

pub fn workers_handler() -> Router {
    Router::new()
        .route("/", get(get_worker_profiles).post(create_worker_profile))
        .route(
            "/:profile_id",
            get(get_worker_profile)
                .put(update_worker_profile)
                .delete(delete_worker_profile),
        )
}

pub async fn get_worker_profiles(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<RequestQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    query
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query.page.unwrap_or(1) as u32;
    let limit = query.limit.unwrap_or(50);

    let profiles = app_state
        .db_client
        .get_worker_profiles(page, limit)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(WorkerProfileDto::from_profiles(&profiles)))
}

pub async fn get_worker_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(profile_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let profile = app_state
        .db_client
        .get_worker_profile(profile_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::WorkerProfileNotFound.to_string()))?;

    Ok(Json(WorkerProfileDto::from_profile(&profile)))
}

pub async fn create_worker_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateWorkerProfileDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    app_state
        .db_client
        .get_user(body.user_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::UserNotFound.to_string()))?;

    // One profile per user.
    let existing = app_state
        .db_client
        .get_worker_profile_by_user(body.user_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if existing.is_some() {
        return Err(HttpError::unique_constraint_violation(
            ErrorMessage::WorkerProfileExists.to_string(),
        ));
    }

    let profile = app_state
        .db_client
        .save_worker_profile(
            body.user_id,
            body.specialization,
            body.bio,
            body.experience,
            body.categories,
        )
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                HttpError::unique_constraint_violation(
                    ErrorMessage::WorkerProfileExists.to_string(),
                )
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    tracing::info!(profile_id = %profile.id, user_id = %profile.user_id, "created worker profile");

    Ok((
        StatusCode::CREATED,
        Json(WorkerProfileDto::from_profile(&profile)),
    ))
}

pub async fn update_worker_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(profile_id): Path<Uuid>,
    Json(body): Json<UpdateWorkerProfileDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    app_state
        .db_client
        .get_worker_profile(profile_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::WorkerProfileNotFound.to_string()))?;

    app_state
        .db_client
        .update_worker_profile(
            profile_id,
            body.specialization,
            body.bio,
            body.experience,
            body.categories,
            body.is_verified,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_worker_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(profile_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let deleted = app_state
        .db_client
        .delete_worker_profile(profile_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if deleted == 0 {
        return Err(HttpError::not_found(
            ErrorMessage::WorkerProfileNotFound.to_string(),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
