use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Outcome of reconciling an app's reported revenue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ValidationRecord {
    pub id: String,
    pub app_id: String,
    pub app_name: Option<String>,
    pub advertiser_id: Option<String>,
    pub status: String,
    pub revenue: Option<Decimal>,
    pub notes: Option<String>,
    /// Unset until a reviewer signs off
    pub validated_at: Option<DateTime<Utc>>,
}
