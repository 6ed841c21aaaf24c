pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::Invoice;
pub use repositories::{InvoiceRepository, INVOICE_LISTING};
