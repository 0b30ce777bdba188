use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    Rejected,
}

impl OrderStatus {
    /// Moving an order to Completed stamps its completion time; every other
    /// status leaves the stored value untouched.
    pub fn completion_timestamp(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            OrderStatus::Completed => Some(now),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Order {
    pub id: Uuid,
    pub service_id: Uuid,
    pub customer_id: Uuid,
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

/// Insert payload for an order. Built from the create request plus the
/// service being booked, which supplies the price.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub service_id: Uuid,
    pub customer_id: Uuid,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub customer_notes: Option<String>,
    pub address: Option<String>,
    pub contact_phone: Option<String>,
    pub total_price: BigDecimal,
}

/// Order row joined with the service title and customer name, for listing DTOs.
#[derive(Debug, sqlx::FromRow, Clone)]
pub struct OrderWithDetails {
    #[sqlx(flatten)]
    pub order: Order,
    pub service_title: Option<String>,
    pub customer_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_to_str() {
        assert_eq!(OrderStatus::Pending.to_str(), "pending");
        assert_eq!(OrderStatus::InProgress.to_str(), "in_progress");
        assert_eq!(OrderStatus::Rejected.to_str(), "rejected");
    }

    #[test]
    fn test_completion_timestamp_stamped_only_on_completed() {
        let now = Utc::now();

        assert_eq!(
            OrderStatus::Completed.completion_timestamp(now),
            Some(now)
        );

        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::InProgress,
            OrderStatus::Cancelled,
            OrderStatus::Rejected,
        ] {
            assert_eq!(status.completion_timestamp(now), None);
        }
    }
}
