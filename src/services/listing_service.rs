//! Marketplace listings: browse, create, edit, delete.

use log::debug;
use reqwest::Method;
use serde_json::Value;

use crate::errors::ClientError;
use crate::models::{Listing, ServiceDraft};
use crate::services::{ApiClient, RequestOptions};
use crate::validators::validate_service_draft;

pub struct ListingService {
    api: ApiClient,
}

impl ListingService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Listing>, ClientError> {
        self.api.get("/services").await
    }

    pub async fn get(&self, id: i64) -> Result<Listing, ClientError> {
        self.api.get(&format!("/services/{}", id)).await
    }

    /// Create a listing. The draft is checked for required fields before any request.
    pub async fn create(&self, draft: &ServiceDraft) -> Result<(), ClientError> {
        validate_service_draft(draft)?;
        let _: Value = self.api.post("/services", draft).await?;
        Ok(())
    }

    pub async fn update(&self, id: i64, draft: &ServiceDraft) -> Result<(), ClientError> {
        validate_service_draft(draft)?;
        let _: Value = self.api.put(&format!("/services/{}", id), draft).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let _: Value = self.api.delete(&format!("/services/{}", id)).await?;
        Ok(())
    }

    /// Count a view of the listing. Fire-and-forget: failures are only logged.
    pub async fn record_view(&self, id: i64) {
        let result = self
            .api
            .request::<Value>(
                &format!("/services/{}/view", id),
                RequestOptions::method(Method::POST),
            )
            .await;
        if let Err(e) = result {
            debug!("View count for service {} not recorded: {}", id, e);
        }
    }

    /// Load a listing and count the view.
    pub async fn open(&self, id: i64) -> Result<Listing, ClientError> {
        let listing = self.get(id).await?;
        self.record_view(id).await;
        Ok(listing)
    }
}
