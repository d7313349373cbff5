//! Authentication request models.

use serde::Serialize;
use validator::Validate;

/// Request payload for user login
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    /// User's email address
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// User's password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }
}
