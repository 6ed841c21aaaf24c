use std::collections::HashMap;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::query::parse_listing_query;
use crate::modules::invoices::repositories::InvoiceRepository;

/// GET /admin/invoices
///
/// Filters: `advertiser_name`, `invoice_number`, `paid_in_full`, `from`, `to`;
/// pagination via `page`/`limit`.
pub async fn list_invoices(
    repo: web::Data<InvoiceRepository>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let (filters, params) = parse_listing_query(&query);
    let page = repo.list(&filters, params).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/invoices", web::get().to(list_invoices));
}
