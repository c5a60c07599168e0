//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error payload returned by failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error code for programmatic handling
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorBody {
    /// Create a new error body
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a single detail to the error body
    pub fn with_detail(mut self, key: impl ToString, value: serde_json::Value) -> Self {
        let mut details = self.details.unwrap_or_default();
        details.insert(key.to_string(), value);
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_with_detail() {
        let body = ErrorBody::new("forbidden", "Forbidden access")
            .with_detail("required_role", serde_json::json!("admin"));

        assert_eq!(body.error, "forbidden");
        assert_eq!(body.details.unwrap()["required_role"], "admin");
    }

    #[test]
    fn test_error_body_serialization_skips_empty_details() {
        let body = ErrorBody::new("not_found", "Resource not found: User");
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("\"details\""));
    }
}
