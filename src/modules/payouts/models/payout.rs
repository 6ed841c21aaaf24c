use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One day of revenue for one app, as stored by the ad network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RevenueRecord {
    pub date: NaiveDate,
    pub app_id: String,
    /// Non-negative gross revenue
    pub revenue: Decimal,
    /// Opaque status label, carried through to the payout line
    pub status: Option<String>,
}

/// Inclusive day window a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of days covered; zero for an inverted window
    pub fn days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(0)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Commission/GST/net split of one gross amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayoutSplit {
    pub gross_revenue: Decimal,
    pub commission_ex_gst: Decimal,
    pub gst_on_commission: Decimal,
    pub net_payout: Decimal,
}

/// Payout derived from one revenue record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutLine {
    pub date: NaiveDate,
    pub app_id: String,
    pub gross_revenue: Decimal,
    pub commission_ex_gst: Decimal,
    pub gst_on_commission: Decimal,
    pub net_payout: Decimal,
    pub status: Option<String>,
}

impl PayoutLine {
    pub fn from_split(record: RevenueRecord, split: PayoutSplit) -> Self {
        Self {
            date: record.date,
            app_id: record.app_id,
            gross_revenue: split.gross_revenue,
            commission_ex_gst: split.commission_ex_gst,
            gst_on_commission: split.gst_on_commission,
            net_payout: split.net_payout,
            status: record.status,
        }
    }
}

/// Window-wide sums of the payout figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayoutTotals {
    pub gross_revenue: Decimal,
    pub commission_ex_gst: Decimal,
    pub gst_on_commission: Decimal,
    pub net_payout: Decimal,
}

impl PayoutTotals {
    pub fn add(&mut self, split: &PayoutSplit) {
        self.gross_revenue += split.gross_revenue;
        self.commission_ex_gst += split.commission_ex_gst;
        self.gst_on_commission += split.gst_on_commission;
        self.net_payout += split.net_payout;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutReport {
    pub window: DateWindow,
    pub items: Vec<PayoutLine>,
    pub totals: PayoutTotals,
}

impl PayoutReport {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
