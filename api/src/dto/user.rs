//! DTOs for user registration and management

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bb_core::domain::entities::user::{User, UserRole};

/// Request body for POST /users
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    /// Email address, the unique match key
    #[validate(email)]
    pub email: String,

    /// Optional display name
    pub name: Option<String>,
}

/// User representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}
