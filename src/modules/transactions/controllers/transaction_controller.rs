use std::collections::HashMap;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::query::parse_listing_query;
use crate::modules::transactions::models::NewTransaction;
use crate::modules::transactions::repositories::TransactionRepository;

/// GET /admin/transactions
pub async fn list_transactions(
    repo: web::Data<TransactionRepository>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let (filters, params) = parse_listing_query(&query);
    let page = repo.list(&filters, params).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// POST /admin/transactions
pub async fn create_transaction(
    repo: web::Data<TransactionRepository>,
    request: web::Json<NewTransaction>,
) -> Result<HttpResponse, AppError> {
    let transaction = repo.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(transaction))
}

/// Configure transaction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/admin/transactions")
            .route(web::get().to(list_transactions))
            .route(web::post().to(create_transaction)),
    );
}
