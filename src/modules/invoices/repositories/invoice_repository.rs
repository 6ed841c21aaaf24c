use std::sync::Arc;

use sqlx::MySqlPool;

use crate::core::query::{
    FilterField, FilterKind, FilteredPageQuery, ListingFilter, ListingSpec, MySqlListingSource,
};
use crate::core::{Page, PageParams, Result};
use crate::modules::invoices::models::Invoice;

/// Filterable fields of the invoice review listing
pub static INVOICE_LISTING: ListingSpec = ListingSpec {
    name: "invoices",
    table: "invoices",
    columns: "id, advertiser_id, advertiser_name, invoice_number, amount, paid_in_full, \
              period_start, period_end, created_at",
    order_by: "created_at",
    filters: &[
        FilterField::new("advertiser_name", "advertiser_name", FilterKind::Substring),
        FilterField::new("invoice_number", "invoice_number", FilterKind::Substring),
        FilterField::new("paid_in_full", "paid_in_full", FilterKind::Flag),
        FilterField::new("from", "created_at", FilterKind::From),
        FilterField::new("to", "created_at", FilterKind::To),
    ],
};

/// Read side of the invoices table
pub struct InvoiceRepository {
    query: FilteredPageQuery<Invoice>,
}

impl InvoiceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        let source = Arc::new(MySqlListingSource::<Invoice>::new(pool, &INVOICE_LISTING));
        Self {
            query: FilteredPageQuery::new(&INVOICE_LISTING, source),
        }
    }

    pub async fn list(&self, filters: &ListingFilter, params: PageParams) -> Result<Page<Invoice>> {
        self.query.list(filters, params).await
    }
}
