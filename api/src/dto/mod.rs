//! Request and response data transfer objects.

pub mod auth;
pub mod error;
pub mod property;
pub mod user;

pub use auth::{IssueTokenRequest, TokenResponse};
pub use error::{ErrorBody, ErrorBodyExt};
pub use property::{AgentPropertiesQuery, PropertyResponse, SubmitPropertyRequest};
pub use user::{RegisterUserRequest, UserResponse};
