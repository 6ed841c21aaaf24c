use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payout_ledger::config::Config;
use payout_ledger::middleware::ErrorLogger;
use payout_ledger::modules::{
    self,
    billing::{BillingService, MySqlBillingRepository},
    invoices::InvoiceRepository,
    payments::PaymentRepository,
    payouts::{MySqlRevenueRepository, PayoutService},
    transactions::TransactionRepository,
    validations::ValidationRepository,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("payout_ledger={},actix_web=info", config.app.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting Payout Ledger");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} max connections)",
        config.database.max_connections
    );

    let payout_service = web::Data::new(PayoutService::new(Arc::new(
        MySqlRevenueRepository::new(db_pool.clone()),
    )));
    let billing_service = web::Data::new(BillingService::new(Arc::new(
        MySqlBillingRepository::new(db_pool.clone()),
    )));
    let invoices = web::Data::new(InvoiceRepository::new(db_pool.clone()));
    let transactions = web::Data::new(TransactionRepository::new(db_pool.clone()));
    let validations = web::Data::new(ValidationRepository::new(db_pool.clone()));
    let payments = web::Data::new(PaymentRepository::new(db_pool.clone()));
    let pool_data = web::Data::new(db_pool);

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorLogger)
            .wrap(TracingLogger::default())
            .app_data(pool_data.clone())
            .app_data(payout_service.clone())
            .app_data(billing_service.clone())
            .app_data(invoices.clone())
            .app_data(transactions.clone())
            .app_data(validations.clone())
            .app_data(payments.clone())
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
