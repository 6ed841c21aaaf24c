pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::ValidationRecord;
pub use repositories::{ValidationRepository, VALIDATION_LISTING};
