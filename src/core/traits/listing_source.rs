use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::core::query::PredicateSet;
use crate::core::Result;

/// Read capabilities a listing surface needs from storage.
///
/// Implementations must tolerate the three calls running concurrently for one
/// request and must apply the same predicate set identically in each.
#[async_trait]
pub trait ListingSource<T: Send>: Send + Sync {
    /// Fetch up to `limit` rows after skipping `offset`, ordered by `order_by` descending
    async fn fetch_rows(
        &self,
        predicates: &PredicateSet,
        order_by: &'static str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<T>>;

    /// Count every matching row, ignoring pagination
    async fn count_rows(&self, predicates: &PredicateSet) -> Result<i64>;

    /// Sum a numeric column over every matching row (zero when nothing matches)
    async fn sum_rows(&self, predicates: &PredicateSet, column: &'static str) -> Result<Decimal>;
}
