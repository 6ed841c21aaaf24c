use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::payouts::models::PayoutReport;
use crate::modules::payouts::repositories::RevenueRepository;
use crate::modules::payouts::services::date_window::resolve_window;
use crate::modules::payouts::services::payout_aggregator::PayoutAggregator;

/// Per-advertiser payout reports over a date window
pub struct PayoutService {
    revenue_repo: Arc<dyn RevenueRepository>,
    aggregator: PayoutAggregator,
}

impl PayoutService {
    pub fn new(revenue_repo: Arc<dyn RevenueRepository>) -> Self {
        Self {
            revenue_repo,
            aggregator: PayoutAggregator::default(),
        }
    }

    /// Resolve the window, fetch the advertiser's revenue in it and aggregate.
    ///
    /// # Errors
    /// `Validation` for a blank advertiser id; storage errors pass through.
    pub async fn generate_report(
        &self,
        advertiser_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<PayoutReport> {
        let advertiser_id = advertiser_id.trim();
        if advertiser_id.is_empty() {
            return Err(AppError::validation("advertiser id is required"));
        }

        let window = resolve_window(from, to);
        info!(
            advertiser_id,
            start = %window.start,
            end = %window.end,
            "Generating payout report"
        );

        let rows = self.revenue_repo.fetch_revenue(advertiser_id, window).await?;
        let report = self.aggregator.aggregate(rows, window);

        if report.is_empty() {
            warn!(advertiser_id, "No revenue rows in payout window");
        }

        Ok(report)
    }
}
