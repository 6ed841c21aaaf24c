use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::middleware::AdvertiserId;
use crate::modules::billing::models::BillingDetailsPayload;
use crate::modules::billing::services::BillingService;

/// GET /advertiser/billing
///
/// Always 200: an advertiser without a profile gets the all-null shape.
pub async fn get_billing_details(
    service: web::Data<BillingService>,
    advertiser: AdvertiserId,
) -> Result<HttpResponse, AppError> {
    let profile = service.get(advertiser.as_str()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// PUT /advertiser/billing
pub async fn upsert_billing_details(
    service: web::Data<BillingService>,
    advertiser: AdvertiserId,
    payload: web::Json<BillingDetailsPayload>,
) -> Result<HttpResponse, AppError> {
    let profile = service
        .upsert(advertiser.as_str(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/advertiser/billing")
            .route(web::get().to(get_billing_details))
            .route(web::put().to(upsert_billing_details)),
    );
}
