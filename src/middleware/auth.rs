use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::core::AppError;

/// Header the upstream auth gateway sets after verifying the caller
pub const ADVERTISER_HEADER: &str = "X-Advertiser-Id";

/// Authenticated advertiser identity.
///
/// Authentication happens upstream; the value is trusted as the hard scope for
/// every payout and billing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertiserId(pub String);

impl AdvertiserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn extract_advertiser_id(req: &HttpRequest) -> Result<AdvertiserId, AppError> {
    req.headers()
        .get(ADVERTISER_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| AdvertiserId(v.to_string()))
        .ok_or_else(|| AppError::unauthorized(format!("Missing {} header", ADVERTISER_HEADER)))
}

impl FromRequest for AdvertiserId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_advertiser_id(req))
    }
}
