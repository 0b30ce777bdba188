use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use crate::error::HttpError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Service {0} not found")]
    ServiceNotFound(Uuid),

    #[error("Order {0} not found")]
    OrderNotFound(Uuid),

    #[error("User {0} not found")]
    UserNotFound(Uuid),

    #[error("Worker profile {0} not found")]
    WorkerProfileNotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::ServiceNotFound(_)
            | ServiceError::OrderNotFound(_)
            | ServiceError::UserNotFound(_)
            | ServiceError::WorkerProfileNotFound(_) => StatusCode::NOT_FOUND,

            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,

            ServiceError::Database(e) => match e.as_database_error() {
                Some(db_err) if db_err.is_unique_violation() => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        let status = error.status_code();
        match status {
            StatusCode::INTERNAL_SERVER_ERROR => HttpError::server_error(error.to_string()),
            _ => HttpError::new(error.to_string(), status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants_map_to_404() {
        let id = Uuid::new_v4();
        assert_eq!(
            ServiceError::ServiceNotFound(id).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::OrderNotFound(id).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::WorkerProfileNotFound(id).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = ServiceError::Validation("bad input".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let http: HttpError = err.into();
        assert_eq!(http.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_generic_database_error_maps_to_500() {
        let err = ServiceError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
