use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::billing::models::BillingProfile;

/// Storage for advertiser billing profiles (at most one per advertiser)
#[async_trait]
pub trait BillingRepository: Send + Sync {
    async fn find_by_advertiser(&self, advertiser_id: &str) -> Result<Option<BillingProfile>>;

    /// Create the advertiser's profile from `profile`'s detail fields
    async fn insert(
        &self,
        advertiser_id: &str,
        profile: &BillingProfile,
    ) -> Result<BillingProfile>;

    /// Overwrite every detail field of the advertiser's stored profile
    async fn update(
        &self,
        advertiser_id: &str,
        profile: &BillingProfile,
    ) -> Result<BillingProfile>;
}

pub struct MySqlBillingRepository {
    pool: MySqlPool,
}

impl MySqlBillingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_existing(&self, advertiser_id: &str) -> Result<BillingProfile> {
        self.find_by_advertiser(advertiser_id).await?.ok_or_else(|| {
            AppError::internal(format!(
                "Billing profile for advertiser '{}' was written but not found",
                advertiser_id
            ))
        })
    }
}

#[async_trait]
impl BillingRepository for MySqlBillingRepository {
    async fn find_by_advertiser(&self, advertiser_id: &str) -> Result<Option<BillingProfile>> {
        let profile = sqlx::query_as::<_, BillingProfile>(
            r#"
            SELECT
                id, advertiser_id, beneficiary_name, account_number, ifsc_code,
                pan, gstin, bank_name, swift_code, created_at, updated_at
            FROM billing_details
            WHERE advertiser_id = ?
            "#,
        )
        .bind(advertiser_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn insert(
        &self,
        advertiser_id: &str,
        profile: &BillingProfile,
    ) -> Result<BillingProfile> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO billing_details (
                id, advertiser_id, beneficiary_name, account_number, ifsc_code,
                pan, gstin, bank_name, swift_code, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(advertiser_id)
        .bind(&profile.beneficiary_name)
        .bind(&profile.account_number)
        .bind(&profile.ifsc_code)
        .bind(&profile.pan)
        .bind(&profile.gstin)
        .bind(&profile.bank_name)
        .bind(&profile.swift_code)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.fetch_existing(advertiser_id).await
    }

    async fn update(
        &self,
        advertiser_id: &str,
        profile: &BillingProfile,
    ) -> Result<BillingProfile> {
        sqlx::query(
            r#"
            UPDATE billing_details
            SET beneficiary_name = ?,
                account_number = ?,
                ifsc_code = ?,
                pan = ?,
                gstin = ?,
                bank_name = ?,
                swift_code = ?,
                updated_at = ?
            WHERE advertiser_id = ?
            "#,
        )
        .bind(&profile.beneficiary_name)
        .bind(&profile.account_number)
        .bind(&profile.ifsc_code)
        .bind(&profile.pan)
        .bind(&profile.gstin)
        .bind(&profile.bank_name)
        .bind(&profile.swift_code)
        .bind(Utc::now())
        .bind(advertiser_id)
        .execute(&self.pool)
        .await?;

        self.fetch_existing(advertiser_id).await
    }
}
