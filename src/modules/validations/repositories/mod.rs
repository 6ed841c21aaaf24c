mod validation_repository;

pub use validation_repository::{ValidationRepository, VALIDATION_LISTING};
