//! Admin moderation of creator verifications and listings.
//!
//! The backend enforces admin rights on every one of these endpoints; a
//! non-admin session gets a 401/403 back as a regular [`ClientError::Api`].

use log::info;
use reqwest::Method;
use serde_json::Value;

use crate::errors::ClientError;
use crate::models::{Listing, ServiceStatus, StatusUpdate, Verification};
use crate::services::{ApiClient, RequestOptions};

pub struct AdminService {
    api: ApiClient,
}

impl AdminService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn verifications(&self) -> Result<Vec<Verification>, ClientError> {
        self.api.get("/admin/creators/verifications").await
    }

    pub async fn approve(&self, id: i64) -> Result<(), ClientError> {
        self.decide(id, "approve").await?;
        info!("Verification request {} approved", id);
        Ok(())
    }

    pub async fn reject(&self, id: i64) -> Result<(), ClientError> {
        self.decide(id, "reject").await?;
        info!("Verification request {} rejected", id);
        Ok(())
    }

    async fn decide(&self, id: i64, decision: &str) -> Result<(), ClientError> {
        let _: Value = self
            .api
            .request(
                &format!("/admin/creators/verifications/{}/{}", id, decision),
                RequestOptions::method(Method::PUT),
            )
            .await?;
        Ok(())
    }

    /// Listings in the given moderation status.
    pub async fn services(&self, status: ServiceStatus) -> Result<Vec<Listing>, ClientError> {
        self.api
            .get(&format!("/admin/services?status={}", status))
            .await
    }

    pub async fn set_service_status(
        &self,
        id: i64,
        status: ServiceStatus,
    ) -> Result<(), ClientError> {
        let _: Value = self
            .api
            .patch(
                &format!("/admin/services/{}/status", id),
                &StatusUpdate { status },
            )
            .await?;
        info!("Service {} moved to {}", id, status);
        Ok(())
    }

    pub async fn delete_service(&self, id: i64) -> Result<(), ClientError> {
        let _: Value = self
            .api
            .delete(&format!("/admin/services/{}", id))
            .await?;
        info!("Service {} deleted by admin", id);
        Ok(())
    }
}
