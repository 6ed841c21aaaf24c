use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use super::filter::{ListingFilter, ListingSpec};
use crate::core::pagination::{Page, PageParams};
use crate::core::traits::ListingSource;
use crate::core::Result;

/// Filtered, paginated listing over one surface.
///
/// The list and count queries share one predicate set and run concurrently;
/// a failure in either fails the whole call.
pub struct FilteredPageQuery<T: Send> {
    spec: &'static ListingSpec,
    source: Arc<dyn ListingSource<T>>,
}

impl<T: Send> Clone for FilteredPageQuery<T> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec,
            source: Arc::clone(&self.source),
        }
    }
}

impl<T: Send> FilteredPageQuery<T> {
    pub fn new(spec: &'static ListingSpec, source: Arc<dyn ListingSource<T>>) -> Self {
        Self { spec, source }
    }

    pub async fn list(&self, filters: &ListingFilter, params: PageParams) -> Result<Page<T>> {
        let predicates = self.spec.build_predicates(filters);
        debug!(
            surface = self.spec.name,
            predicates = predicates.len(),
            page = params.page,
            limit = params.limit,
            "Listing page"
        );

        let (items, total) = tokio::try_join!(
            self.source.fetch_rows(
                &predicates,
                self.spec.order_by,
                i64::from(params.limit),
                params.offset()
            ),
            self.source.count_rows(&predicates),
        )?;

        Ok(Page::new(items, total, params))
    }

    /// Like [`list`](Self::list), plus a concurrent sum of `column` over all matches.
    pub async fn list_with_sum(
        &self,
        filters: &ListingFilter,
        params: PageParams,
        column: &'static str,
    ) -> Result<(Page<T>, Decimal)> {
        let predicates = self.spec.build_predicates(filters);
        debug!(
            surface = self.spec.name,
            predicates = predicates.len(),
            sum_column = column,
            "Listing page with totals"
        );

        let (items, total, sum) = tokio::try_join!(
            self.source.fetch_rows(
                &predicates,
                self.spec.order_by,
                i64::from(params.limit),
                params.offset()
            ),
            self.source.count_rows(&predicates),
            self.source.sum_rows(&predicates, column),
        )?;

        Ok((Page::new(items, total, params), sum))
    }
}
