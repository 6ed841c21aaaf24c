pub mod commission_calculator;
pub mod date_window;
pub mod payout_aggregator;
pub mod payout_service;

pub use commission_calculator::CommissionCalculator;
pub use date_window::{resolve_window, resolve_window_at};
pub use payout_aggregator::PayoutAggregator;
pub use payout_service::PayoutService;
