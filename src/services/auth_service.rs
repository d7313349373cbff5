//! Authentication service: login and best-effort logout.

use log::{debug, info};
use reqwest::Method;
use serde_json::Value;

use crate::config::Config;
use crate::constants::ERR_MISSING_TOKEN;
use crate::errors::ClientError;
use crate::models::{LoginRequest, LoginResponse, Role};
use crate::services::{resolve_role, ApiClient, RequestOptions};
use crate::utils::{mask_email, mask_token};
use crate::validators::validate_payload;

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub role: Role,
    /// Where the user should land: the admin area for admins, the dashboard otherwise.
    pub landing: String,
}

/// Service for authentication operations.
pub struct AuthService {
    api: ApiClient,
    dashboard_path: String,
    admin_path: String,
}

impl AuthService {
    pub fn new(api: ApiClient, config: &Config) -> Self {
        Self {
            api,
            dashboard_path: config.dashboard_path.clone(),
            admin_path: config.admin_path.clone(),
        }
    }

    /// Exchange e-mail and password for a credential and start a session.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginOutcome, ClientError> {
        validate_payload(&request)?;

        info!("Logging in as {}", mask_email(&request.email));
        let response: LoginResponse = self.api.post("/auth/login", &request).await?;
        let token = response
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::Decode(ERR_MISSING_TOKEN.to_string()))?;

        let role = resolve_role(Some(&token));
        self.api.session().save(&token, role);
        debug!("Session {} stored with role {}", mask_token(&token), role);

        let landing = if role.is_admin() {
            self.admin_path.clone()
        } else {
            self.dashboard_path.clone()
        };

        info!("Login successful for {} ({})", mask_email(&request.email), role);
        Ok(LoginOutcome { role, landing })
    }

    /// Tell the backend the session is over. Failures are ignored: the local
    /// session is torn down by the caller regardless.
    pub async fn logout(&self) {
        let result = self
            .api
            .request::<Value>("/auth/logout", RequestOptions::method(Method::POST))
            .await;
        if let Err(e) = result {
            debug!("Server-side logout failed, continuing: {}", e);
        }
    }
}
