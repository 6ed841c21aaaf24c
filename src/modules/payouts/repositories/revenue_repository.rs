use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::payouts::models::{DateWindow, RevenueRecord};

/// Source of raw revenue rows for payout reports
#[async_trait]
pub trait RevenueRepository: Send + Sync {
    /// Revenue rows for one advertiser inside the inclusive window, newest first
    async fn fetch_revenue(
        &self,
        advertiser_id: &str,
        window: DateWindow,
    ) -> Result<Vec<RevenueRecord>>;
}

pub struct MySqlRevenueRepository {
    pool: MySqlPool,
}

impl MySqlRevenueRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevenueRepository for MySqlRevenueRepository {
    async fn fetch_revenue(
        &self,
        advertiser_id: &str,
        window: DateWindow,
    ) -> Result<Vec<RevenueRecord>> {
        let rows = sqlx::query_as::<_, RevenueRecord>(
            r#"
            SELECT date, app_id, revenue, status
            FROM app_revenue
            WHERE advertiser_id = ? AND date BETWEEN ? AND ?
            ORDER BY date DESC, app_id
            "#,
        )
        .bind(advertiser_id)
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
