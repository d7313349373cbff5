//! Marketplace service listings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Moderation status of a listing. Defined by the backend.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    Draft,
    #[default]
    PendingReview,
    Active,
    Rejected,
    Disabled,
}

impl ServiceStatus {
    pub const ALL: [ServiceStatus; 5] = [
        ServiceStatus::Draft,
        ServiceStatus::PendingReview,
        ServiceStatus::Active,
        ServiceStatus::Rejected,
        ServiceStatus::Disabled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Draft => "DRAFT",
            ServiceStatus::PendingReview => "PENDING_REVIEW",
            ServiceStatus::Active => "ACTIVE",
            ServiceStatus::Rejected => "REJECTED",
            ServiceStatus::Disabled => "DISABLED",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase().replace('-', "_");
        ServiceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown service status '{}', expected one of DRAFT, PENDING_REVIEW, ACTIVE, REJECTED, DISABLED",
                    s
                )
            })
    }
}

/// A service offered by a creator.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    #[serde(default)]
    pub owner_id: i64,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    /// Comma separated tags.
    #[serde(default)]
    pub tags: String,
    /// Delivery time in days.
    #[serde(default)]
    pub delivery_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatus>,
}

impl Listing {
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}
