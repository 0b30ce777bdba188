use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::servicemodel::ServiceCategory;

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct WorkerProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub specialization: Option<String>,
    pub rating: f64,
    pub completed_orders: i32,
    pub bio: Option<String>,
    pub experience: Option<String>,
    pub categories: Vec<ServiceCategory>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}
