use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{orderdb::OrderExt, servicedb::ServiceExt, userdb::UserExt},
    dtos::{
        orderdtos::{CreateOrderDto, OrderDto, UpdateOrderDto},
        userdtos::RequestQueryDto,
    },
    error::{ErrorMessage, HttpError},
    AppState,
};

pub fn orders_handler() -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route(
            "/:order_id",
            get(get_order).put(update_order).delete(delete_order),
        )
}

pub async fn list_orders(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<RequestQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    query
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query.page.unwrap_or(1) as u32;
    let limit = query.limit.unwrap_or(50);

    let orders = app_state
        .db_client
        .get_orders(page, limit)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let dtos: Vec<OrderDto> = orders.iter().map(OrderDto::from_row).collect();

    Ok(Json(dtos))
}

pub async fn get_order(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let order = app_state
        .db_client
        .get_order_with_details(order_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::OrderNotFound.to_string()))?;

    Ok(Json(OrderDto::from_row(&order)))
}

pub async fn create_order(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let service = app_state
        .db_client
        .get_service(body.service_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::ServiceNotFound.to_string()))?;

    let customer = app_state
        .db_client
        .get_user(body.customer_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::UserNotFound.to_string()))?;

    let order = app_state
        .db_client
        .save_order(body.into_new_order(&service))
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    tracing::info!(order_id = %order.id, service_id = %order.service_id, "created order");

    Ok((
        StatusCode::CREATED,
        Json(OrderDto::from_order(
            &order,
            Some(service.title),
            Some(customer.name),
        )),
    ))
}

pub async fn update_order(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
    Json(body): Json<UpdateOrderDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    app_state
        .db_client
        .get_order(order_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::OrderNotFound.to_string()))?;

    let completed_at = body.status.completion_timestamp(Utc::now());

    app_state
        .db_client
        .update_order(
            order_id,
            body.status,
            body.worker_notes,
            body.scheduled_date,
            completed_at,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_order(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let deleted = app_state
        .db_client
        .delete_order(order_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if deleted == 0 {
        return Err(HttpError::not_found(ErrorMessage::OrderNotFound.to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
