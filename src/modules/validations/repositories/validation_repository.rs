use std::sync::Arc;

use sqlx::MySqlPool;

use crate::core::query::{
    FilterField, FilterKind, FilteredPageQuery, ListingFilter, ListingSpec, MySqlListingSource,
};
use crate::core::{Page, PageParams, Result};
use crate::modules::validations::models::ValidationRecord;

/// Filterable fields of the validation review listing.
///
/// Rows without `validated_at` sort as "now", so their relative order is not
/// stable between calls.
pub static VALIDATION_LISTING: ListingSpec = ListingSpec {
    name: "validations",
    table: "validations",
    columns: "*",
    order_by: "COALESCE(validated_at, NOW())",
    filters: &[
        FilterField::new("app_name", "app_name", FilterKind::Substring),
        FilterField::new("app_id", "app_id", FilterKind::Exact),
        FilterField::new("status", "status", FilterKind::Exact),
        FilterField::new("from", "validated_at", FilterKind::From),
        FilterField::new("to", "validated_at", FilterKind::To),
    ],
};

pub struct ValidationRepository {
    query: FilteredPageQuery<ValidationRecord>,
}

impl ValidationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        let source = Arc::new(MySqlListingSource::<ValidationRecord>::new(
            pool,
            &VALIDATION_LISTING,
        ));
        Self {
            query: FilteredPageQuery::new(&VALIDATION_LISTING, source),
        }
    }

    pub async fn list(
        &self,
        filters: &ListingFilter,
        params: PageParams,
    ) -> Result<Page<ValidationRecord>> {
        self.query.list(filters, params).await
    }
}
