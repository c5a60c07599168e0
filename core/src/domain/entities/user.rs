//! User entity representing a registered user in the BengalBreeze system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a user in the marketplace
///
/// The role is a closed enumeration: anything that is not an agent or an
/// admin, including an email with no backing user record at all, is
/// `None`. Roles are resolved live from the user store on every
/// authorization check and are never embedded in bearer tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// An ordinary account with no elevated privileges
    #[default]
    None,
    /// A property-listing agent
    Agent,
    /// An administrator
    Admin,
}

impl UserRole {
    /// Stable string form, matching the stored role column
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::None => "none",
            UserRole::Agent => "agent",
            UserRole::Admin => "admin",
        }
    }

    /// Parse the stored role column; unknown values collapse to `None`
    pub fn from_str_or_none(value: &str) -> Self {
        match value {
            "agent" => UserRole::Agent,
            "admin" => UserRole::Admin,
            _ => UserRole::None,
        }
    }
}

/// User entity representing a registered user
///
/// The email is the unique match key and is compared byte-for-byte;
/// no case normalization is applied anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, the unique case-sensitive match key
    pub email: String,

    /// Display name, if provided at registration
    pub name: Option<String>,

    /// Role of the user
    pub role: UserRole,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with no elevated role
    pub fn new(email: impl Into<String>, name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            name,
            role: UserRole::None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the user role
    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    /// Checks if the user is an admin
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Checks if the user is an agent
    pub fn is_agent(&self) -> bool {
        self.role == UserRole::Agent
    }
}
