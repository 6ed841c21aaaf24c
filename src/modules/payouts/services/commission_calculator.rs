use rust_decimal::{Decimal, RoundingStrategy};

use crate::modules::payouts::models::PayoutSplit;

/// Share of gross revenue the network keeps, GST included (30%)
pub const COMMISSION_RATE_INCL_GST: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// GST embedded in the commission (18%)
pub const GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Decimal places payout figures are reported with
pub const PAYOUT_SCALE: u32 = 6;

/// Splits gross revenue into commission, GST on commission and net payout.
///
/// Callers must pass validated, non-negative revenue; nothing here checks it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommissionCalculator;

impl CommissionCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Split with every figure rounded to [`PAYOUT_SCALE`] places, half away from zero
    pub fn compute_payout(&self, gross_revenue: Decimal) -> PayoutSplit {
        round_split(&self.compute_unrounded(gross_revenue))
    }

    /// Full-precision split; rounding is left to the caller
    pub fn compute_unrounded(&self, gross_revenue: Decimal) -> PayoutSplit {
        let commission_incl_gst = gross_revenue * COMMISSION_RATE_INCL_GST;
        let commission_ex_gst = commission_incl_gst / (Decimal::ONE + GST_RATE);
        let gst_on_commission = commission_incl_gst - commission_ex_gst;

        PayoutSplit {
            gross_revenue,
            commission_ex_gst,
            gst_on_commission,
            net_payout: gross_revenue - commission_ex_gst,
        }
    }
}

pub fn round_payout(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(PAYOUT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

pub fn round_split(split: &PayoutSplit) -> PayoutSplit {
    PayoutSplit {
        gross_revenue: round_payout(split.gross_revenue),
        commission_ex_gst: round_payout(split.commission_ex_gst),
        gst_on_commission: round_payout(split.gst_on_commission),
        net_payout: round_payout(split.net_payout),
    }
}
