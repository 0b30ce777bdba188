use axum::{routing::get, Json, Router};
use bigdecimal::BigDecimal;
use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::{
    dtos::servicedtos::ServiceDto,
    models::servicemodel::{ServiceCategory, ServiceStatus},
};

/// Static fixture endpoints for client development. No database access.
pub fn test_handler() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/jobs", get(get_test_jobs))
        .route("/users", get(get_test_users))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "message": "API is running!",
        "timestamp": Utc::now(),
    }))
}

async fn get_test_jobs() -> Json<Vec<ServiceDto>> {
    Json(fixture_services())
}

async fn get_test_users() -> Json<serde_json::Value> {
    Json(json!([
        { "id": 1, "name": "Ivan Petrov", "email": "ivan@example.com", "role": "Worker" },
        { "id": 2, "name": "Anna Sidorova", "email": "anna@example.com", "role": "Worker" },
        { "id": 3, "name": "Mikhail Kozlov", "email": "mikhail@example.com", "role": "Customer" },
    ]))
}

// Fresh ids per call; the listings below override what differs.
fn base_fixture() -> ServiceDto {
    ServiceDto {
        id: Uuid::new_v4(),
        worker_id: Uuid::new_v4(),
        worker_name: String::new(),
        title: String::new(),
        description: String::new(),
        price: BigDecimal::from(0),
        status: ServiceStatus::Available,
        category: ServiceCategory::Other,
        location: None,
        is_remote: false,
        rating: 0.0,
        completed_orders: 0,
        created_at: Utc::now(),
        updated_at: None,
    }
}

pub fn fixture_services() -> Vec<ServiceDto> {
    vec![
        ServiceDto {
            worker_name: "Ivan Petrov".to_string(),
            title: "Apartment deep clean".to_string(),
            description: "Full deep clean of apartments up to three rooms, kitchen and bathroom included.".to_string(),
            price: BigDecimal::from(3500),
            category: ServiceCategory::Cleaning,
            location: Some("Moscow".to_string()),
            rating: 4.8,
            completed_orders: 124,
            created_at: Utc::now() - Duration::hours(48),
            ..base_fixture()
        },
        ServiceDto {
            worker_name: "Anna Sidorova".to_string(),
            title: "Washing machine repair".to_string(),
            description: "Diagnostics and repair of all major washing machine brands, parts in stock.".to_string(),
            price: BigDecimal::from(2000),
            category: ServiceCategory::Repair,
            location: Some("Saint Petersburg".to_string()),
            rating: 4.6,
            completed_orders: 87,
            created_at: Utc::now() - Duration::hours(24),
            ..base_fixture()
        },
        ServiceDto {
            worker_name: "Mikhail Kozlov".to_string(),
            title: "Same-day parcel delivery".to_string(),
            description: "Courier delivery across the city within four hours of pickup.".to_string(),
            price: BigDecimal::from(600),
            category: ServiceCategory::Delivery,
            location: Some("Moscow".to_string()),
            rating: 4.9,
            completed_orders: 310,
            created_at: Utc::now() - Duration::hours(12),
            ..base_fixture()
        },
        ServiceDto {
            worker_name: "Elena Volkova".to_string(),
            title: "Garden maintenance".to_string(),
            description: "Lawn mowing, hedge trimming and seasonal planting for private gardens.".to_string(),
            price: BigDecimal::from(1500),
            status: ServiceStatus::Paused,
            category: ServiceCategory::Gardening,
            location: Some("Novosibirsk".to_string()),
            rating: 4.3,
            completed_orders: 42,
            created_at: Utc::now() - Duration::hours(6),
            ..base_fixture()
        },
        ServiceDto {
            worker_name: "Dmitry Smirnov".to_string(),
            title: "Dog walking".to_string(),
            description: "Daily walks for dogs of any size, morning and evening slots.".to_string(),
            price: BigDecimal::from(500),
            category: ServiceCategory::PetCare,
            location: Some("Yekaterinburg".to_string()),
            rating: 4.7,
            completed_orders: 198,
            created_at: Utc::now() - Duration::hours(3),
            ..base_fixture()
        },
        ServiceDto {
            worker_name: "Olga Morozova".to_string(),
            title: "Math tutoring online".to_string(),
            description: "Exam preparation in mathematics for high school students, online sessions.".to_string(),
            price: BigDecimal::from(1200),
            status: ServiceStatus::Unavailable,
            category: ServiceCategory::Tutoring,
            location: Some("Kazan".to_string()),
            is_remote: true,
            rating: 5.0,
            completed_orders: 64,
            created_at: Utc::now() - Duration::hours(1),
            ..base_fixture()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_services_shape() {
        let services = fixture_services();
        assert_eq!(services.len(), 6);

        // Ids must be distinct and every listed status/category must be valid.
        let mut ids: Vec<Uuid> = services.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);

        assert!(services
            .iter()
            .any(|s| s.status == ServiceStatus::Available));
        assert!(services.iter().any(|s| s.status == ServiceStatus::Paused));
        assert!(services.iter().any(|s| s.is_remote));
    }

    #[test]
    fn test_fixture_services_serialize_as_json_array() {
        let json = serde_json::to_value(fixture_services()).unwrap();
        let arr = json.as_array().expect("expected a JSON array");
        assert_eq!(arr.len(), 6);
        assert!(arr[0].get("workerName").is_some());
        assert!(arr[0].get("createdAt").is_some());
    }
}
