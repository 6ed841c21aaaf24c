use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Advertiser invoice as shown on the admin review screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: String,
    pub advertiser_id: String,
    pub advertiser_name: String,
    pub invoice_number: String,
    pub amount: Decimal,
    pub paid_in_full: bool,
    /// Billing period the invoice covers
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
