//! Creators directory built from the public listings.

use futures::future::join_all;
use log::debug;
use std::collections::BTreeMap;

use crate::errors::ClientError;
use crate::models::{Listing, Profile, VerificationLabel};
use crate::services::{ApiClient, ListingService, ProfileService};

/// One creator in the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatorCard {
    pub id: i64,
    /// `None` when the profile could not be fetched.
    pub profile: Option<Profile>,
    /// Owner name as it appears on the creator's listings.
    pub fallback_name: Option<String>,
    pub service_count: usize,
}

impl CreatorCard {
    pub fn name(&self) -> String {
        self.profile
            .as_ref()
            .map(|p| p.display_name.as_str())
            .filter(|n| !n.is_empty())
            .or(self.fallback_name.as_deref().filter(|n| !n.is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Creator #{}", self.id))
    }

    pub fn verification(&self) -> VerificationLabel {
        VerificationLabel::from_status(
            self.profile
                .as_ref()
                .and_then(|p| p.verification_status.as_deref()),
        )
    }
}

#[derive(Debug, Default)]
struct OwnerMeta {
    fallback_name: Option<String>,
    service_count: usize,
}

fn group_owners(listings: &[Listing]) -> BTreeMap<i64, OwnerMeta> {
    let mut owners: BTreeMap<i64, OwnerMeta> = BTreeMap::new();
    for listing in listings {
        let meta = owners.entry(listing.owner_id).or_default();
        if !listing.owner_name.is_empty() {
            meta.fallback_name = Some(listing.owner_name.clone());
        }
        meta.service_count += 1;
    }
    owners
}

/// Load the directory: one listing fetch, then every owner's profile concurrently.
///
/// Only the listing fetch can fail the whole page; a missing profile degrades
/// to the owner name found on the listings.
pub async fn load_creators(api: &ApiClient) -> Result<Vec<CreatorCard>, ClientError> {
    let listings = ListingService::new(api.clone()).list().await?;
    let owners = group_owners(&listings);
    let profiles = ProfileService::new(api.clone());

    let fetched = join_all(owners.keys().map(|id| profiles.by_id(*id))).await;

    Ok(owners
        .into_iter()
        .zip(fetched)
        .map(|((id, meta), profile)| {
            let profile = match profile {
                Ok(p) => Some(p),
                Err(e) => {
                    debug!("Profile of creator {} unavailable: {}", id, e);
                    None
                }
            };
            CreatorCard {
                id,
                profile,
                fallback_name: meta.fallback_name,
                service_count: meta.service_count,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(owner_id: i64, owner_name: &str) -> Listing {
        Listing {
            owner_id,
            owner_name: owner_name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_group_owners_counts_services() {
        let owners = group_owners(&[listing(2, "Bo"), listing(1, "Ana"), listing(2, "Bo")]);
        assert_eq!(owners.len(), 2);
        assert_eq!(owners[&2].service_count, 2);
        assert_eq!(owners[&1].fallback_name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_card_name_prefers_profile() {
        let card = CreatorCard {
            id: 1,
            profile: Some(Profile {
                display_name: "Ana Lima".to_string(),
                ..Default::default()
            }),
            fallback_name: Some("ana".to_string()),
            service_count: 1,
        };
        assert_eq!(card.name(), "Ana Lima");
    }

    #[test]
    fn test_card_name_fallbacks() {
        let mut card = CreatorCard {
            id: 5,
            profile: None,
            fallback_name: Some("ana".to_string()),
            service_count: 1,
        };
        assert_eq!(card.name(), "ana");
        card.fallback_name = None;
        assert_eq!(card.name(), "Creator #5");
        assert_eq!(card.verification(), VerificationLabel::Unverified);
    }
}
