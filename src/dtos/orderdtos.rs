use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    ordermodel::{NewOrder, Order, OrderStatus, OrderWithDetails},
    servicemodel::Service,
};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    pub service_id: Uuid,
    pub customer_id: Uuid,

    pub scheduled_date: Option<DateTime<Utc>>,

    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub customer_notes: Option<String>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 20, message = "Contact phone must be at most 20 characters"))]
    pub contact_phone: Option<String>,
}

impl CreateOrderDto {
    /// The order is priced at the service's current rate.
    pub fn into_new_order(self, service: &Service) -> NewOrder {
        NewOrder {
            service_id: self.service_id,
            customer_id: self.customer_id,
            scheduled_date: self.scheduled_date,
            customer_notes: self.customer_notes,
            address: self.address,
            contact_phone: self.contact_phone,
            total_price: service.price.clone(),
        }
    }
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderDto {
    pub status: OrderStatus,

    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub worker_notes: Option<String>,

    pub scheduled_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: Uuid,
    pub service_id: Uuid,
    pub service_title: String,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub status: OrderStatus,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub customer_notes: Option<String>,
    pub worker_notes: Option<String>,
    pub total_price: BigDecimal,
    pub address: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl OrderDto {
    pub fn from_order(
        order: &Order,
        service_title: Option<String>,
        customer_name: Option<String>,
    ) -> Self {
        OrderDto {
            id: order.id,
            service_id: order.service_id,
            service_title: service_title.unwrap_or_else(|| "Unknown".to_string()),
            customer_id: order.customer_id,
            customer_name: customer_name.unwrap_or_else(|| "Unknown".to_string()),
            status: order.status,
            scheduled_date: order.scheduled_date,
            completed_at: order.completed_at,
            customer_notes: order.customer_notes.clone(),
            worker_notes: order.worker_notes.clone(),
            total_price: order.total_price.clone(),
            address: order.address.clone(),
            contact_phone: order.contact_phone.clone(),
            created_at: order.created_at,
        }
    }

    pub fn from_row(row: &OrderWithDetails) -> Self {
        OrderDto::from_order(
            &row.order,
            row.service_title.clone(),
            row.customer_name.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::servicemodel::{ServiceCategory, ServiceStatus};

    #[test]
    fn test_new_order_copies_current_service_price() {
        let service = Service {
            id: Uuid::new_v4(),
            worker_id: Uuid::new_v4(),
            title: "Apartment deep clean".to_string(),
            description: "Full deep clean".to_string(),
            price: BigDecimal::from(3500),
            status: ServiceStatus::Available,
            category: ServiceCategory::Cleaning,
            location: None,
            is_remote: false,
            rating: 0.0,
            completed_orders: 0,
            created_at: Utc::now(),
            updated_at: None,
        };

        let body = CreateOrderDto {
            service_id: service.id,
            customer_id: Uuid::new_v4(),
            scheduled_date: None,
            customer_notes: Some("Morning preferred".to_string()),
            address: Some("Tverskaya 1".to_string()),
            contact_phone: None,
        };
        let customer_id = body.customer_id;

        let new_order = body.into_new_order(&service);
        assert_eq!(new_order.total_price, BigDecimal::from(3500));
        assert_eq!(new_order.service_id, service.id);
        assert_eq!(new_order.customer_id, customer_id);
        assert_eq!(
            new_order.customer_notes,
            Some("Morning preferred".to_string())
        );
    }

    #[test]
    fn test_update_order_dto_rejects_long_notes() {
        let dto = UpdateOrderDto {
            status: OrderStatus::Confirmed,
            worker_notes: Some("x".repeat(501)),
            scheduled_date: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_order_dto_echoes_order_fields() {
        let order = Order {
            id: Uuid::new_v4(),
            service_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            status: OrderStatus::Pending,
            scheduled_date: None,
            completed_at: None,
            customer_notes: Some("Morning preferred".to_string()),
            worker_notes: None,
            total_price: BigDecimal::from(3500),
            address: Some("Tverskaya 1".to_string()),
            contact_phone: Some("+79991234567".to_string()),
            created_at: Utc::now(),
        };

        let dto = OrderDto::from_order(
            &order,
            Some("Apartment deep clean".to_string()),
            Some("Ivan".to_string()),
        );
        assert_eq!(dto.id, order.id);
        assert_eq!(dto.service_title, "Apartment deep clean");
        assert_eq!(dto.customer_name, "Ivan");
        assert_eq!(dto.status, OrderStatus::Pending);
        assert_eq!(dto.total_price, BigDecimal::from(3500));

        let dto = OrderDto::from_order(&order, None, None);
        assert_eq!(dto.service_title, "Unknown");
        assert_eq!(dto.customer_name, "Unknown");
    }
}
