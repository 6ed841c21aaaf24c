mod payout;

pub use payout::{DateWindow, PayoutLine, PayoutReport, PayoutSplit, PayoutTotals, RevenueRecord};
