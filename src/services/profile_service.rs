//! Profile reads and updates.

use serde_json::Value;

use crate::errors::ClientError;
use crate::models::Profile;
use crate::services::ApiClient;

pub struct ProfileService {
    api: ApiClient,
}

impl ProfileService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Profile of the logged-in user.
    pub async fn me(&self) -> Result<Profile, ClientError> {
        self.api.get("/profile/me").await
    }

    /// Public profile of any creator.
    pub async fn by_id(&self, id: i64) -> Result<Profile, ClientError> {
        self.api.get(&format!("/profile/{}", id)).await
    }

    pub async fn update_me(&self, profile: &Profile) -> Result<(), ClientError> {
        let _: Value = self.api.put("/profile/me", profile).await?;
        Ok(())
    }
}
