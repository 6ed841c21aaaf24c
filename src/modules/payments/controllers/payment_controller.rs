use std::collections::HashMap;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::query::parse_listing_query;
use crate::modules::payments::repositories::PaymentRepository;

/// GET /admin/payments
///
/// Same envelope as the other listings plus `total_amount` over all matches.
pub async fn list_payments(
    repo: web::Data<PaymentRepository>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let (filters, params) = parse_listing_query(&query);
    let listing = repo.list(&filters, params).await?;

    Ok(HttpResponse::Ok().json(listing))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/payments", web::get().to(list_payments));
}
