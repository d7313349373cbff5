//! Creator verification requests.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A creator verification request, as returned to the creator or to admins.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Issuer-specific fields (creator name, e-mail...) kept for display.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Verification {
    pub fn label(&self) -> VerificationLabel {
        VerificationLabel::from_status(self.status.as_deref())
    }

    /// Best human-readable name of the requesting creator, if the backend sent one.
    pub fn creator_name(&self) -> Option<&str> {
        ["creatorName", "displayName", "userName", "email"]
            .iter()
            .find_map(|key| self.extra.get(*key).and_then(Value::as_str))
    }
}

/// Display classification of a verification status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationLabel {
    Verified,
    Pending,
    Rejected,
    Unverified,
}

impl VerificationLabel {
    pub fn from_status(status: Option<&str>) -> Self {
        let Some(status) = status.map(str::to_uppercase) else {
            return VerificationLabel::Unverified;
        };
        if status.contains("APPROVED") || status.contains("VERIFIED") {
            VerificationLabel::Verified
        } else if status.contains("PENDING") {
            VerificationLabel::Pending
        } else if status.contains("REJECT") {
            VerificationLabel::Rejected
        } else {
            VerificationLabel::Unverified
        }
    }
}

impl fmt::Display for VerificationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VerificationLabel::Verified => "Verified",
            VerificationLabel::Pending => "Pending",
            VerificationLabel::Rejected => "Rejected",
            VerificationLabel::Unverified => "Unverified",
        };
        f.write_str(label)
    }
}
