pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::{Payment, PaymentListing};
pub use repositories::{PaymentRepository, PAYMENT_LISTING};
