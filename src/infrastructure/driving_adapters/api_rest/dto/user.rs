//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::user::{CreateUserData, User, UserStatus};

/// DTO for creating a new user
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUserDto {
    #[serde(default)]
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: String,
}

impl From<CreateUserDto> for CreateUserData {
    fn from(dto: CreateUserDto) -> Self {
        Self { name: dto.name }
    }
}

/// Query string of `GET /user`
#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub username: Option<String>,
}

/// DTO for user responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: Uuid,
    pub name: String,
    pub status: UserStatus,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            name: user.username().to_string(),
            status: user.status(),
            created_on: user.created_on(),
            modified_on: user.modified_on(),
        }
    }
}

/// Body of `GET /user/all`
#[derive(Debug, Clone, Serialize)]
pub struct UserListDto {
    pub users: Vec<UserResponseDto>,
}

impl From<Vec<User>> for UserListDto {
    fn from(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(UserResponseDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_user_with_lowercase_status() {
        let user = User::new(CreateUserData {
            name: "jdoe".to_string(),
        });

        let json = serde_json::to_value(UserResponseDto::from(user)).unwrap();

        assert_eq!(json["name"], "jdoe");
        assert_eq!(json["status"], "active");
        assert!(json.get("createdOn").is_some());
        assert!(json.get("modifiedOn").is_some());
    }
}
