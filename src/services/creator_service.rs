//! Creator metrics and the verification request lifecycle.

use serde_json::Value;

use crate::constants::DEFAULT_VERIFICATION_REASON;
use crate::errors::ClientError;
use crate::models::{CreatorStats, Verification, VerificationSubmission};
use crate::services::ApiClient;

pub struct CreatorService {
    api: ApiClient,
}

impl CreatorService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn stats(&self) -> Result<CreatorStats, ClientError> {
        self.api.get("/creator/stats").await
    }

    /// The caller's own verification request.
    pub async fn my_verification(&self) -> Result<Verification, ClientError> {
        self.api.get("/creator-verification/me").await
    }

    /// Submit a verification request and return its fresh state.
    ///
    /// A blank reason is replaced by a generic one.
    pub async fn submit_verification(&self, reason: &str) -> Result<Verification, ClientError> {
        let reason = match reason.trim() {
            "" => DEFAULT_VERIFICATION_REASON.to_string(),
            r => r.to_string(),
        };
        let _: Value = self
            .api
            .post("/creator-verification", &VerificationSubmission { reason })
            .await?;
        self.my_verification().await
    }
}
