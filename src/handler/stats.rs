use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Extension, Json, Router};
use serde_json::json;

use crate::{
    db::{orderdb::OrderExt, servicedb::ServiceExt, userdb::UserExt, workerdb::WorkerExt},
    error::HttpError,
    AppState,
};

pub fn stats_handler() -> Router {
    Router::new().route("/", get(get_stats))
}

/// Row counts backing the client's stats screen.
pub async fn get_stats(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let users = app_state
        .db_client
        .get_user_count()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let workers = app_state
        .db_client
        .get_worker_count()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let services = app_state
        .db_client
        .get_service_count()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let orders = app_state
        .db_client
        .get_order_count()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(json!({
        "users": users,
        "workers": workers,
        "services": services,
        "orders": orders,
    })))
}
