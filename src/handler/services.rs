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
    db::servicedb::ServiceSearchFilters,
    dtos::servicedtos::{CreateServiceDto, ServiceDto, ServiceQueryDto, UpdateServiceDto},
    error::HttpError,
    AppState,
};

pub fn services_handler() -> Router {
    Router::new()
        .route("/", get(list_services).post(create_service))
        .route(
            "/:service_id",
            get(get_service).put(update_service).delete(delete_service),
        )
}

pub async fn list_services(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<ServiceQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    query
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query.page.unwrap_or(1) as u32;
    let limit = query.limit.unwrap_or(50);

    let filters = ServiceSearchFilters {
        category: query.category,
        status: query.status,
        location: query.location,
        is_remote: query.is_remote,
        min_price: query.min_price,
        max_price: query.max_price,
    };

    let services = app_state
        .catalog_service
        .list_services(filters, page, limit)
        .await?;

    let dtos: Vec<ServiceDto> = services.iter().map(ServiceDto::from_row).collect();

    Ok(Json(dtos))
}

pub async fn get_service(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(service_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let service = app_state.catalog_service.get_service(service_id).await?;

    Ok(Json(ServiceDto::from_row(&service)))
}

pub async fn create_service(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateServiceDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let service = app_state.catalog_service.create_service(body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ServiceDto::from_service(&service, None)),
    ))
}

pub async fn update_service(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(service_id): Path<Uuid>,
    Json(body): Json<UpdateServiceDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    app_state
        .catalog_service
        .update_service(service_id, body)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_service(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(service_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    app_state.catalog_service.delete_service(service_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
