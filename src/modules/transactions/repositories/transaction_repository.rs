use std::sync::Arc;

use chrono::Utc;
use sqlx::MySqlPool;
use uuid::Uuid;

use crate::core::query::{
    FilterField, FilterKind, FilteredPageQuery, ListingFilter, ListingSpec, MySqlListingSource,
};
use crate::core::{Page, PageParams, Result};
use crate::modules::transactions::models::{NewTransaction, Transaction};

/// Filterable fields of the transaction review listing
pub static TRANSACTION_LISTING: ListingSpec = ListingSpec {
    name: "transactions",
    table: "transactions",
    columns: "id, advertiser_id, app_id, app_name, amount, transaction_type, status, \
              description, created_at",
    order_by: "created_at",
    filters: &[
        FilterField::new("app_name", "app_name", FilterKind::Substring),
        FilterField::new("advertiser_id", "advertiser_id", FilterKind::Exact),
        FilterField::new("transaction_type", "transaction_type", FilterKind::Exact),
        FilterField::new("status", "status", FilterKind::Exact),
        FilterField::new("from", "created_at", FilterKind::From),
        FilterField::new("to", "created_at", FilterKind::To),
    ],
};

/// Repository for advertiser ledger transactions
pub struct TransactionRepository {
    pool: MySqlPool,
    query: FilteredPageQuery<Transaction>,
}

impl TransactionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        let source = Arc::new(MySqlListingSource::<Transaction>::new(
            pool.clone(),
            &TRANSACTION_LISTING,
        ));
        Self {
            pool,
            query: FilteredPageQuery::new(&TRANSACTION_LISTING, source),
        }
    }

    pub async fn list(
        &self,
        filters: &ListingFilter,
        params: PageParams,
    ) -> Result<Page<Transaction>> {
        self.query.list(filters, params).await
    }

    /// Validate and insert a transaction, returning the stored row.
    ///
    /// # Errors
    /// `Validation` before anything touches the database; storage errors as-is.
    pub async fn create(&self, request: NewTransaction) -> Result<Transaction> {
        let valid = request.validate()?;

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            advertiser_id: valid.advertiser_id,
            app_id: valid.app_id,
            app_name: valid.app_name,
            amount: valid.amount,
            transaction_type: valid.transaction_type.to_string(),
            status: valid.status,
            description: valid.description,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO transactions (
                id, advertiser_id, app_id, app_name, amount,
                transaction_type, status, description, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&transaction.id)
        .bind(&transaction.advertiser_id)
        .bind(&transaction.app_id)
        .bind(&transaction.app_name)
        .bind(transaction.amount)
        .bind(&transaction.transaction_type)
        .bind(&transaction.status)
        .bind(&transaction.description)
        .bind(transaction.created_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            transaction_id = %transaction.id,
            advertiser_id = %transaction.advertiser_id,
            amount = %transaction.amount,
            "Transaction recorded"
        );

        Ok(transaction)
    }
}
