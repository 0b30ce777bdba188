use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{servicemodel::ServiceCategory, workermodel::WorkerProfile};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerProfileDto {
    pub user_id: Uuid,

    #[validate(length(max = 200, message = "Specialization must be at most 200 characters"))]
    pub specialization: Option<String>,

    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,

    #[validate(length(max = 100, message = "Experience must be at most 100 characters"))]
    pub experience: Option<String>,

    #[serde(default)]
    pub categories: Vec<ServiceCategory>,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkerProfileDto {
    #[validate(length(max = 200, message = "Specialization must be at most 200 characters"))]
    pub specialization: Option<String>,

    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,

    #[validate(length(max = 100, message = "Experience must be at most 100 characters"))]
    pub experience: Option<String>,

    #[serde(default)]
    pub categories: Vec<ServiceCategory>,

    #[serde(default)]
    pub is_verified: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorkerProfileDto {
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

impl WorkerProfileDto {
    pub fn from_profile(profile: &WorkerProfile) -> Self {
        WorkerProfileDto {
            id: profile.id,
            user_id: profile.user_id,
            specialization: profile.specialization.clone(),
            rating: profile.rating,
            completed_orders: profile.completed_orders,
            bio: profile.bio.clone(),
            experience: profile.experience.clone(),
            categories: profile.categories.clone(),
            is_verified: profile.is_verified,
            created_at: profile.created_at,
        }
    }

    pub fn from_profiles(profiles: &[WorkerProfile]) -> Vec<WorkerProfileDto> {
        profiles.iter().map(WorkerProfileDto::from_profile).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_worker_profile_dto_rejects_long_bio() {
        let dto = CreateWorkerProfileDto {
            user_id: Uuid::new_v4(),
            specialization: None,
            bio: Some("x".repeat(501)),
            experience: None,
            categories: vec![],
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_worker_profile_dto_mapping() {
        let profile = WorkerProfile {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            specialization: Some("Plumbing".to_string()),
            rating: 4.5,
            completed_orders: 12,
            bio: None,
            experience: Some("5 years".to_string()),
            categories: vec![ServiceCategory::Repair],
            is_verified: true,
            created_at: Utc::now(),
        };

        let dto = WorkerProfileDto::from_profile(&profile);
        assert_eq!(dto.user_id, profile.user_id);
        assert_eq!(dto.rating, 4.5);
        assert_eq!(dto.categories, vec![ServiceCategory::Repair]);
        assert!(dto.is_verified);
    }
}
