//! Authentication response models.

use serde::Deserialize;

/// Response to `/auth/login`. Only the credential is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}
