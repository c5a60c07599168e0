//! Property entity and its verification/advertisement state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Verification status of a property listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Submitted, awaiting admin review
    Pending,
    /// Approved by an admin
    Verified,
    /// Declined by an admin
    Rejected,
}

impl VerificationStatus {
    /// Stable string form, matching the stored status column
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Rejected => "rejected",
        }
    }

    /// Parse the stored status column
    pub fn from_str_or_pending(value: &str) -> Self {
        match value {
            "verified" => VerificationStatus::Verified,
            "rejected" => VerificationStatus::Rejected,
            _ => VerificationStatus::Pending,
        }
    }
}

/// Client-supplied fields of a new listing
///
/// The verification status and advertisement flag are never part of the
/// draft; every listing starts pending and not advertised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDraft {
    /// Listing title
    pub title: String,

    /// Location, if provided
    pub location: Option<String>,
}

/// Property listing entity
///
/// State transitions are idempotent: re-applying one reports `false`
/// (nothing changed) instead of failing, so callers may retry safely.
/// A listing can only be advertised while it is verified, and leaving
/// the verified status withdraws the advertisement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier for the property
    pub id: Uuid,

    /// Email of the owning agent
    pub agent_email: String,

    /// Listing title
    pub title: String,

    /// Location, if provided
    pub location: Option<String>,

    /// Verification status
    pub verification_status: VerificationStatus,

    /// Whether the listing is currently advertised
    pub is_advertised: bool,

    /// Timestamp when the property was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the property was last updated
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Creates a new pending, not-advertised listing owned by `agent_email`
    pub fn new(agent_email: impl Into<String>, draft: PropertyDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            agent_email: agent_email.into(),
            title: draft.title,
            location: draft.location,
            verification_status: VerificationStatus::Pending,
            is_advertised: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the listing as verified
    ///
    /// Returns `true` when the status changed, `false` when it was
    /// already verified.
    pub fn verify(&mut self) -> bool {
        if self.verification_status == VerificationStatus::Verified {
            return false;
        }
        self.verification_status = VerificationStatus::Verified;
        self.updated_at = Utc::now();
        true
    }

    /// Marks the listing as rejected and withdraws any advertisement
    ///
    /// Returns `true` when the status changed, `false` when it was
    /// already rejected.
    pub fn reject(&mut self) -> bool {
        if self.verification_status == VerificationStatus::Rejected {
            return false;
        }
        self.verification_status = VerificationStatus::Rejected;
        self.is_advertised = false;
        self.updated_at = Utc::now();
        true
    }

    /// Puts the listing on the advertised shelf
    ///
    /// Only a verified listing can be advertised; anything else fails
    /// with an invalid-transition error. Returns `Ok(false)` when the
    /// listing was already advertised.
    pub fn advertise(&mut self) -> Result<bool, DomainError> {
        if self.verification_status != VerificationStatus::Verified {
            return Err(DomainError::InvalidTransition {
                message: format!(
                    "cannot advertise a {} property",
                    self.verification_status.as_str()
                ),
            });
        }
        if self.is_advertised {
            return Ok(false);
        }
        self.is_advertised = true;
        self.updated_at = Utc::now();
        Ok(true)
    }

    /// Withdraws the listing from the advertised shelf
    ///
    /// Allowed from any state. Returns `true` when the flag changed.
    pub fn unadvertise(&mut self) -> bool {
        if !self.is_advertised {
            return false;
        }
        self.is_advertised = false;
        self.updated_at = Utc::now();
        true
    }

    /// Checks if the listing is verified
    pub fn is_verified(&self) -> bool {
        self.verification_status == VerificationStatus::Verified
    }
}
