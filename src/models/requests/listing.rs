//! Listing and moderation request models.

use serde::Serialize;
use validator::Validate;

use crate::constants::ERR_FILL_SERVICE_FIELDS;
use crate::models::ServiceStatus;

/// Request payload for creating or updating a listing.
///
/// Title, description, price and delivery time are required; tags are optional.
#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub tags: String,
    #[validate(required(message = "Price is required"))]
    pub price: Option<f64>,
    /// Delivery time in days.
    #[validate(required(message = "Delivery time is required"))]
    pub delivery_time: Option<i64>,
}

impl ServiceDraft {
    /// Required-field check with the single notice shown on listing forms.
    pub fn check(&self) -> Result<(), String> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(ERR_FILL_SERVICE_FIELDS.to_string());
        }
        self.validate()
            .map_err(|_| ERR_FILL_SERVICE_FIELDS.to_string())
    }
}

/// Request payload for an admin status change.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: ServiceStatus,
}

/// Request payload for a creator verification request.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationSubmission {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> ServiceDraft {
        ServiceDraft {
            title: "Logo design".to_string(),
            description: "A custom logo".to_string(),
            tags: String::new(),
            price: Some(49.0),
            delivery_time: Some(3),
        }
    }

    #[test]
    fn test_filled_draft_passes() {
        assert!(filled().check().is_ok());
    }

    #[test]
    fn test_missing_price_is_rejected() {
        let draft = ServiceDraft {
            price: None,
            ..filled()
        };
        assert_eq!(draft.check().unwrap_err(), ERR_FILL_SERVICE_FIELDS);
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let draft = ServiceDraft {
            title: "   ".to_string(),
            ..filled()
        };
        assert!(draft.check().is_err());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let value = serde_json::to_value(filled()).unwrap();
        assert_eq!(value["deliveryTime"], json!(3));
        assert_eq!(value["price"], json!(49.0));
    }
}
