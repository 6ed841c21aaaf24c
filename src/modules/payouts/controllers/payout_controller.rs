use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::middleware::AdvertiserId;
use crate::modules::payouts::services::date_window::parse_date_bound;
use crate::modules::payouts::services::PayoutService;

/// Query parameters for the payout report
#[derive(Debug, Default, Deserialize)]
pub struct PayoutReportQuery {
    /// Inclusive start day (YYYY-MM-DD); defaults to 29 days before `to`
    #[serde(default)]
    pub from: Option<String>,
    /// Inclusive end day (YYYY-MM-DD); defaults to today
    #[serde(default)]
    pub to: Option<String>,
}

/// GET /advertiser/payouts
pub async fn get_payout_report(
    service: web::Data<PayoutService>,
    advertiser: AdvertiserId,
    query: web::Query<PayoutReportQuery>,
) -> Result<HttpResponse, AppError> {
    let from = parse_date_bound("from", query.from.as_deref())?;
    let to = parse_date_bound("to", query.to.as_deref())?;

    let report = service
        .generate_report(advertiser.as_str(), from, to)
        .await?;

    Ok(HttpResponse::Ok().json(report))
}

/// Configure payout routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/advertiser/payouts", web::get().to(get_payout_report));
}
