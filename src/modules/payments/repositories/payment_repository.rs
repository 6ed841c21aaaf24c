use std::sync::Arc;

use sqlx::MySqlPool;

use crate::core::query::{
    FilterField, FilterKind, FilteredPageQuery, ListingFilter, ListingSpec, MySqlListingSource,
};
use crate::core::{PageParams, Result};
use crate::modules::payments::models::{Payment, PaymentListing};

/// Filterable fields of the payment review listing
pub static PAYMENT_LISTING: ListingSpec = ListingSpec {
    name: "payments",
    table: "payments",
    columns: "id, advertiser_id, advertiser_name, amount, reference, status, paid_at",
    order_by: "paid_at",
    filters: &[
        FilterField::new("advertiser_name", "advertiser_name", FilterKind::Substring),
        FilterField::new("reference", "reference", FilterKind::Substring),
        FilterField::new("status", "status", FilterKind::Exact),
        FilterField::new("from", "paid_at", FilterKind::From),
        FilterField::new("to", "paid_at", FilterKind::To),
    ],
};

const AMOUNT_COLUMN: &str = "amount";

pub struct PaymentRepository {
    query: FilteredPageQuery<Payment>,
}

impl PaymentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        let source = Arc::new(MySqlListingSource::<Payment>::new(pool, &PAYMENT_LISTING));
        Self::with_query(FilteredPageQuery::new(&PAYMENT_LISTING, source))
    }

    pub fn with_query(query: FilteredPageQuery<Payment>) -> Self {
        Self { query }
    }

    /// Page of payments together with the amount total of all matches
    pub async fn list(&self, filters: &ListingFilter, params: PageParams) -> Result<PaymentListing> {
        let (page, total_amount) = self
            .query
            .list_with_sum(filters, params, AMOUNT_COLUMN)
            .await?;

        Ok(PaymentListing { page, total_amount })
    }
}
