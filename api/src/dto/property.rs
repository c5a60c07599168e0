//! DTOs for property listings

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bb_core::domain::entities::property::{Property, PropertyDraft, VerificationStatus};

/// Request body for POST /add/properties
///
/// Carries only the client-ownable fields. Verification status and the
/// advertisement flag are not accepted here: every listing starts
/// pending and not advertised.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitPropertyRequest {
    /// Listing title
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Location, if provided
    pub location: Option<String>,
}

impl From<SubmitPropertyRequest> for PropertyDraft {
    fn from(request: SubmitPropertyRequest) -> Self {
        PropertyDraft {
            title: request.title,
            location: request.location,
        }
    }
}

/// Query parameters for GET /agent-properties
///
/// The email filter is derived from the verified identity; this
/// optional parameter exists only for compatibility and is rejected
/// when it names someone else.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentPropertiesQuery {
    pub email: Option<String>,
}

/// Property representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyResponse {
    pub id: Uuid,
    pub agent_email: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub verification_status: VerificationStatus,
    pub is_advertised: bool,
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        Self {
            id: property.id,
            agent_email: property.agent_email,
            title: property.title,
            location: property.location,
            verification_status: property.verification_status,
            is_advertised: property.is_advertised,
        }
    }
}
