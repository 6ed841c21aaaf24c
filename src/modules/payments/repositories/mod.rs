mod payment_repository;

pub use payment_repository::{PaymentRepository, PAYMENT_LISTING};
