//! Creator dashboard: four independent fetches, tolerated to fail one by one.

use log::warn;

use crate::constants::ERR_PARTIAL_LOAD;
use crate::models::{CreatorStats, Listing, Profile, Verification, VerificationLabel};
use crate::services::{ApiClient, CreatorService, ListingService, ProfileService};

/// Everything the dashboard shows. Parts that failed to load are `None`/empty.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub profile: Option<Profile>,
    pub stats: Option<CreatorStats>,
    pub verification: Option<Verification>,
    pub services: Vec<Listing>,
    /// Number of fetches that failed.
    pub failures: usize,
    /// Single page-level notice, set when any fetch failed.
    pub notice: Option<String>,
}

impl Dashboard {
    /// Issue the profile, stats, verification and listing fetches concurrently.
    ///
    /// A failed fetch leaves its part empty; failures are not distinguished in
    /// the notice and the successful parts are kept.
    pub async fn load(api: &ApiClient) -> Self {
        let profiles = ProfileService::new(api.clone());
        let creator = CreatorService::new(api.clone());
        let listings = ListingService::new(api.clone());

        let (profile, stats, verification, services) = futures::join!(
            profiles.me(),
            creator.stats(),
            creator.my_verification(),
            listings.list()
        );

        let mut dashboard = Dashboard::default();
        let mut failures = 0;

        match profile {
            Ok(p) => dashboard.profile = Some(p),
            Err(e) => {
                warn!("Dashboard profile failed to load: {}", e);
                failures += 1;
            }
        }
        match stats {
            Ok(s) => dashboard.stats = Some(s),
            Err(e) => {
                warn!("Dashboard stats failed to load: {}", e);
                failures += 1;
            }
        }
        match verification {
            Ok(v) => dashboard.verification = Some(v),
            Err(e) => {
                warn!("Dashboard verification failed to load: {}", e);
                failures += 1;
            }
        }
        match services {
            Ok(s) => dashboard.services = s,
            Err(e) => {
                warn!("Dashboard services failed to load: {}", e);
                failures += 1;
            }
        }

        dashboard.failures = failures;
        if failures > 0 {
            dashboard.notice = Some(ERR_PARTIAL_LOAD.to_string());
        }
        dashboard
    }

    /// Listings owned by the logged-in creator.
    pub fn my_services(&self) -> Vec<&Listing> {
        match self.profile.as_ref().and_then(|p| p.id) {
            Some(id) => self.services.iter().filter(|s| s.owner_id == id).collect(),
            None => Vec::new(),
        }
    }

    /// Verification status, preferring the request over the profile field.
    pub fn verification_status(&self) -> Option<&str> {
        self.verification
            .as_ref()
            .and_then(|v| v.status.as_deref())
            .filter(|s| !s.is_empty())
            .or_else(|| {
                self.profile
                    .as_ref()
                    .and_then(|p| p.verification_status.as_deref())
            })
    }

    pub fn is_verified(&self) -> bool {
        self.status_is("APPROVED")
    }

    pub fn is_verification_pending(&self) -> bool {
        self.status_is("PENDING")
    }

    pub fn verification_label(&self) -> VerificationLabel {
        VerificationLabel::from_status(self.verification_status())
    }

    fn status_is(&self, wanted: &str) -> bool {
        let from_request = self
            .verification
            .as_ref()
            .and_then(|v| v.status.as_deref());
        let from_profile = self
            .profile
            .as_ref()
            .and_then(|p| p.verification_status.as_deref());
        [from_request, from_profile]
            .into_iter()
            .flatten()
            .any(|s| s.eq_ignore_ascii_case(wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: i64, owner_id: i64) -> Listing {
        Listing {
            id,
            owner_id,
            ..Default::default()
        }
    }

    #[test]
    fn test_my_services_filters_by_profile_id() {
        let dashboard = Dashboard {
            profile: Some(Profile {
                id: Some(9),
                ..Default::default()
            }),
            services: vec![listing(1, 9), listing(2, 4), listing(3, 9)],
            ..Default::default()
        };
        let ids: Vec<i64> = dashboard.my_services().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_my_services_empty_without_profile() {
        let dashboard = Dashboard {
            services: vec![listing(1, 9)],
            ..Default::default()
        };
        assert!(dashboard.my_services().is_empty());
    }

    #[test]
    fn test_verification_falls_back_to_profile() {
        let dashboard = Dashboard {
            profile: Some(Profile {
                verification_status: Some("approved".to_string()),
                ..Default::default()
            }),
            verification: Some(Verification::default()),
            ..Default::default()
        };
        assert!(dashboard.is_verified());
        assert!(!dashboard.is_verification_pending());
        assert_eq!(dashboard.verification_label(), VerificationLabel::Verified);
    }

    #[test]
    fn test_pending_request() {
        let dashboard = Dashboard {
            verification: Some(Verification {
                status: Some("PENDING".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(dashboard.is_verification_pending());
        assert_eq!(dashboard.verification_status(), Some("PENDING"));
    }
}
