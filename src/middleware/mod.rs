pub mod auth;
pub mod error_handler;

pub use auth::{AdvertiserId, ADVERTISER_HEADER};
pub use error_handler::ErrorLogger;
