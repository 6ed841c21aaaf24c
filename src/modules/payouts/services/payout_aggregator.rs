use crate::modules::payouts::models::{
    DateWindow, PayoutLine, PayoutReport, PayoutTotals, RevenueRecord,
};
use crate::modules::payouts::services::commission_calculator::{
    round_payout, round_split, CommissionCalculator,
};

/// Maps revenue rows to payout lines and folds the window totals.
///
/// Totals accumulate the full-precision split of every row and are rounded
/// once at the end. Rounding each line first and summing the rounded values
/// gives a different (drifting) figure and must not be substituted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayoutAggregator {
    calculator: CommissionCalculator,
}

impl PayoutAggregator {
    pub fn new(calculator: CommissionCalculator) -> Self {
        Self { calculator }
    }

    /// Item order follows `rows`.
    pub fn aggregate(&self, rows: Vec<RevenueRecord>, window: DateWindow) -> PayoutReport {
        let mut unrounded = PayoutTotals::default();

        let items: Vec<PayoutLine> = rows
            .into_iter()
            .map(|record| {
                let split = self.calculator.compute_unrounded(record.revenue);
                unrounded.add(&split);
                PayoutLine::from_split(record, round_split(&split))
            })
            .collect();

        let totals = PayoutTotals {
            gross_revenue: round_payout(unrounded.gross_revenue),
            commission_ex_gst: round_payout(unrounded.commission_ex_gst),
            gst_on_commission: round_payout(unrounded.gst_on_commission),
            net_payout: round_payout(unrounded.net_payout),
        };

        PayoutReport {
            window,
            items,
            totals,
        }
    }
}
