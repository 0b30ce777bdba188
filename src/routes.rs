use std::sync::Arc;

use axum::{routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        orders::orders_handler, services::services_handler, stats::stats_handler,
        test::test_handler, users::users_handler, workers::workers_handler,
    },
    AppState,
};

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/users", users_handler())
        .nest("/workers", workers_handler())
        .nest("/services", services_handler())
        .nest("/orders", orders_handler())
        .nest("/stats", stats_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/test", test_handler())
        .nest("/api", api_route)
}
