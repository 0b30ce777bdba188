use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "service_status", rename_all = "snake_case")]
pub enum ServiceStatus {
    Available,
    Unavailable,
    Paused,
}

impl ServiceStatus {
    pub fn to_str(&self) -> &str {
        match self {
            ServiceStatus::Available => "available",
            ServiceStatus::Unavailable => "unavailable",
            ServiceStatus::Paused => "paused",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "service_category", rename_all = "snake_case")]
pub enum ServiceCategory {
    Cleaning,
    Repair,
    Delivery,
    Gardening,
    PetCare,
    Tutoring,
    Photography,
    Beauty,
    Other,
}

impl ServiceCategory {
    pub fn to_str(&self) -> &str {
        match self {
            ServiceCategory::Cleaning => "cleaning",
            ServiceCategory::Repair => "repair",
            ServiceCategory::Delivery => "delivery",
            ServiceCategory::Gardening => "gardening",
            ServiceCategory::PetCare => "pet_care",
            ServiceCategory::Tutoring => "tutoring",
            ServiceCategory::Photography => "photography",
            ServiceCategory::Beauty => "beauty",
            ServiceCategory::Other => "other",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Service {
    pub id: Uuid,
    pub worker_id: Uuid,
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

/// Service row joined with the owning worker's user name, for listing DTOs.
#[derive(Debug, sqlx::FromRow, Clone)]
pub struct ServiceWithWorker {
    #[sqlx(flatten)]
    pub service: Service,
    pub worker_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_status_to_str() {
        assert_eq!(ServiceStatus::Available.to_str(), "available");
        assert_eq!(ServiceStatus::Unavailable.to_str(), "unavailable");
        assert_eq!(ServiceStatus::Paused.to_str(), "paused");
    }

    #[test]
    fn test_service_category_to_str() {
        assert_eq!(ServiceCategory::PetCare.to_str(), "pet_care");
        assert_eq!(ServiceCategory::Other.to_str(), "other");
    }

    // The worker_profiles table has a service_category[] column; the derived
    // sqlx::Type impl must resolve the array element type for it.
    #[test]
    fn test_service_category_array_type_name() {
        use sqlx::postgres::PgHasArrayType;

        let info = ServiceCategory::array_type_info();
        assert_eq!(info.to_string(), "_service_category");
    }
}
