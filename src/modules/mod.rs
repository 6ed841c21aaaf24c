pub mod billing;
pub mod health;
pub mod invoices;
pub mod payments;
pub mod payouts;
pub mod transactions;
pub mod validations;

use actix_web::web;

/// Register every route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::controllers::configure(cfg);
    payouts::controllers::configure(cfg);
    billing::controllers::configure(cfg);
    invoices::controllers::configure(cfg);
    transactions::controllers::configure(cfg);
    validations::controllers::configure(cfg);
    payments::controllers::configure(cfg);
}
