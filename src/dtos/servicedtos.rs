use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::servicemodel::{Service, ServiceCategory, ServiceStatus, ServiceWithWorker};

fn validate_price(price: &BigDecimal) -> Result<(), ValidationError> {
    if price < &BigDecimal::from(0) {
        return Err(ValidationError::new("price_negative"));
    }
    Ok(())
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceDto {
    pub worker_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Title must be between 1-100 characters"))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 1000,
        message = "Description must be between 1-1000 characters"
    ))]
    pub description: String,

    #[validate(custom = "validate_price")]
    pub price: BigDecimal,

    pub category: ServiceCategory,

    #[validate(length(max = 100, message = "Location must be at most 100 characters"))]
    pub location: Option<String>,

    #[serde(default)]
    pub is_remote: bool,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceDto {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1-100 characters"))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 1000,
        message = "Description must be between 1-1000 characters"
    ))]
    pub description: String,

    #[validate(custom = "validate_price")]
    pub price: BigDecimal,

    pub status: ServiceStatus,

    pub category: ServiceCategory,

    #[validate(length(max = 100, message = "Location must be at most 100 characters"))]
    pub location: Option<String>,

    #[serde(default)]
    pub is_remote: bool,
}

/// Search form parameters for the listing page.
#[derive(Validate, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceQueryDto {
    #[validate(range(min = 1))]
    pub page: Option<usize>,

    #[validate(range(min = 1, max = 50))]
    pub limit: Option<usize>,

    pub category: Option<ServiceCategory>,
    pub status: Option<ServiceStatus>,
    pub location: Option<String>,
    pub is_remote: Option<bool>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDto {
    pub id: Uuid,
    pub worker_id: Uuid,
    pub worker_name: String,
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
    pub status: ServiceStatus,
    pub category: ServiceCategory,
    pub location: Option<String>,
    pub is_remote: bool,
    pub rating: f64,
    pub completed_orders: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ServiceDto {
    pub fn from_service(service: &Service, worker_name: Option<String>) -> Self {
        ServiceDto {
            id: service.id,
            worker_id: service.worker_id,
            worker_name: worker_name.unwrap_or_else(|| "Unknown".to_string()),
            title: service.title.clone(),
            description: service.description.clone(),
            price: service.price.clone(),
            status: service.status,
            category: service.category,
            location: service.location.clone(),
            is_remote: service.is_remote,
            rating: service.rating,
            completed_orders: service.completed_orders,
            created_at: service.created_at,
            updated_at: service.updated_at,
        }
    }

    pub fn from_row(row: &ServiceWithWorker) -> Self {
        ServiceDto::from_service(&row.service, row.worker_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create_dto() -> CreateServiceDto {
        CreateServiceDto {
            worker_id: Uuid::new_v4(),
            title: "Apartment deep clean".to_string(),
            description: "Full deep clean including kitchen and bathrooms".to_string(),
            price: BigDecimal::from(3500),
            category: ServiceCategory::Cleaning,
            location: Some("Moscow".to_string()),
            is_remote: false,
        }
    }

    #[test]
    fn test_create_service_dto_valid() {
        assert!(valid_create_dto().validate().is_ok());
    }

    #[test]
    fn test_create_service_dto_rejects_empty_title() {
        let mut dto = valid_create_dto();
        dto.title = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_service_dto_rejects_long_title() {
        let mut dto = valid_create_dto();
        dto.title = "x".repeat(101);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_service_dto_rejects_negative_price() {
        let mut dto = valid_create_dto();
        dto.price = BigDecimal::from(-1);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_service_dto_echoes_service_fields() {
        let service = Service {
            id: Uuid::new_v4(),
            worker_id: Uuid::new_v4(),
            title: "Dog walking".to_string(),
            description: "Daily walks".to_string(),
            price: BigDecimal::from(500),
            status: ServiceStatus::Available,
            category: ServiceCategory::PetCare,
            location: None,
            is_remote: false,
            rating: 0.0,
            completed_orders: 0,
            created_at: Utc::now(),
            updated_at: None,
        };

        let dto = ServiceDto::from_service(&service, Some("Anna".to_string()));
        assert_eq!(dto.id, service.id);
        assert_eq!(dto.worker_name, "Anna");
        assert_eq!(dto.title, "Dog walking");
        assert_eq!(dto.price, BigDecimal::from(500));
        assert_eq!(dto.status, ServiceStatus::Available);

        let dto = ServiceDto::from_service(&service, None);
        assert_eq!(dto.worker_name, "Unknown");
    }
}
