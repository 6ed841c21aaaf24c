pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::{NewTransaction, Transaction, TransactionType};
pub use repositories::{TransactionRepository, TRANSACTION_LISTING};
