pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{DateWindow, PayoutLine, PayoutReport, PayoutTotals, RevenueRecord};
pub use repositories::{MySqlRevenueRepository, RevenueRepository};
pub use services::{CommissionCalculator, PayoutAggregator, PayoutService};
