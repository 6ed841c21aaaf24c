use std::collections::HashMap;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::query::parse_listing_query;
use crate::modules::validations::repositories::ValidationRepository;

/// GET /admin/validations
pub async fn list_validations(
    repo: web::Data<ValidationRepository>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let (filters, params) = parse_listing_query(&query);
    let page = repo.list(&filters, params).await?;

    Ok(HttpResponse::Ok().json(page))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/validations", web::get().to(list_validations));
}
