use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::Page;

/// Payout disbursed to an advertiser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: String,
    pub advertiser_id: String,
    pub advertiser_name: String,
    pub amount: Decimal,
    /// Bank or gateway reference
    pub reference: Option<String>,
    pub status: String,
    pub paid_at: DateTime<Utc>,
}

/// Payment page plus the amount total over every matching row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentListing {
    #[serde(flatten)]
    pub page: Page<Payment>,
    pub total_amount: Decimal,
}
