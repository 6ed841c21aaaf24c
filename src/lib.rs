//! Payout Ledger
//!
//! Commission/payout computation and filtered admin review listings for an
//! advertising-network back office.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::billing;
pub use modules::payouts;
