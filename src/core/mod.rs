pub mod error;
pub mod pagination;
pub mod query;
pub mod traits;

pub use error::{AppError, Result};
pub use pagination::{Page, PageParams};
