pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{BillingDetailsPayload, BillingProfile};
pub use repositories::{BillingRepository, MySqlBillingRepository};
pub use services::BillingService;
