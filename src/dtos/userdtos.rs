use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::usermodel::User;

#[derive(Serialize, Deserialize, Validate)]
pub struct RequestQueryDto {
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 50))]
    pub limit: Option<usize>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(length(min = 10, max = 20, message = "Phone number must be between 10-20 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(length(min = 10, max = 20, message = "Phone number must be between 10-20 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,

    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FilterUserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl FilterUserDto {
    pub fn filter_user(user: &User) -> Self {
        FilterUserDto {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }

    pub fn filter_users(users: &[User]) -> Vec<FilterUserDto> {
        users.iter().map(FilterUserDto::filter_user).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_create_user_dto_rejects_bad_email() {
        let dto = CreateUserDto {
            name: "Ivan Petrov".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            address: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_user_dto_accepts_valid_body() {
        let dto = CreateUserDto {
            name: "Ivan Petrov".to_string(),
            email: "ivan@example.com".to_string(),
            phone: Some("+79991234567".to_string()),
            address: Some("Moscow".to_string()),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_filter_user_echoes_fields() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Anna".to_string(),
            email: "anna@example.com".to_string(),
            phone: None,
            address: None,
            is_active: true,
            created_at: Utc::now(),
        };

        let dto = FilterUserDto::filter_user(&user);
        assert_eq!(dto.id, user.id.to_string());
        assert_eq!(dto.name, "Anna");
        assert_eq!(dto.email, "anna@example.com");
        assert!(dto.is_active);
    }
}
