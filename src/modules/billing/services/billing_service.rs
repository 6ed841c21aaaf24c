use std::sync::Arc;

use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::billing::models::{BillingDetailsPayload, BillingProfile};
use crate::modules::billing::repositories::BillingRepository;

/// Find-or-create access to an advertiser's billing profile
pub struct BillingService {
    repo: Arc<dyn BillingRepository>,
}

fn require_advertiser(advertiser_id: &str) -> Result<&str> {
    let advertiser_id = advertiser_id.trim();
    if advertiser_id.is_empty() {
        return Err(AppError::validation("advertiser id is required"));
    }
    Ok(advertiser_id)
}

impl BillingService {
    pub fn new(repo: Arc<dyn BillingRepository>) -> Self {
        Self { repo }
    }

    /// Stored profile, or the all-null placeholder when none exists yet
    pub async fn get(&self, advertiser_id: &str) -> Result<BillingProfile> {
        let advertiser_id = require_advertiser(advertiser_id)?;

        Ok(self
            .repo
            .find_by_advertiser(advertiser_id)
            .await?
            .unwrap_or_else(BillingProfile::placeholder))
    }

    /// Merge `payload` over the stored profile (or an empty one) and persist it.
    ///
    /// Fields the payload leaves unset or blank keep their stored value.
    pub async fn upsert(
        &self,
        advertiser_id: &str,
        payload: BillingDetailsPayload,
    ) -> Result<BillingProfile> {
        let advertiser_id = require_advertiser(advertiser_id)?;
        let payload = payload.normalized();

        match self.repo.find_by_advertiser(advertiser_id).await? {
            Some(mut existing) => {
                info!(advertiser_id, profile_id = ?existing.id, "Updating billing profile");
                existing.apply(&payload);
                self.repo.update(advertiser_id, &existing).await
            }
            None => {
                info!(advertiser_id, "Creating billing profile");
                let mut profile = BillingProfile::placeholder();
                profile.apply(&payload);
                self.repo.insert(advertiser_id, &profile).await
            }
        }
    }
}
