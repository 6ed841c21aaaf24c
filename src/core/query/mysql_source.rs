use std::marker::PhantomData;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder};

use super::filter::{Comparison, FilterValue, ListingSpec, PredicateSet};
use crate::core::traits::ListingSource;
use crate::core::Result;

/// MySQL-backed listing source for one surface.
///
/// Identifiers (table, columns, order expression) come only from the static
/// [`ListingSpec`]; every filter value is bound as a parameter.
pub struct MySqlListingSource<T> {
    pool: MySqlPool,
    spec: &'static ListingSpec,
    _row: PhantomData<fn() -> T>,
}

impl<T> MySqlListingSource<T> {
    pub fn new(pool: MySqlPool, spec: &'static ListingSpec) -> Self {
        Self {
            pool,
            spec,
            _row: PhantomData,
        }
    }
}

/// Append ` WHERE a AND b ...` for the predicate set
pub(crate) fn push_predicates(qb: &mut QueryBuilder<'_, MySql>, predicates: &PredicateSet) {
    for (i, predicate) in predicates.iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });

        match &predicate.comparison {
            Comparison::Equals(FilterValue::Text(value)) => {
                qb.push(predicate.column).push(" = ").push_bind(value.clone());
            }
            Comparison::Equals(FilterValue::Bool(value)) => {
                qb.push(predicate.column).push(" = ").push_bind(*value);
            }
            Comparison::ContainsIgnoreCase(value) => {
                qb.push("LOWER(")
                    .push(predicate.column)
                    .push(") LIKE ")
                    .push_bind(like_pattern(value))
                    .push(" ESCAPE '!'");
            }
            Comparison::AtLeast(ts) => {
                qb.push(predicate.column).push(" >= ").push_bind(*ts);
            }
            Comparison::AtMost(ts) => {
                qb.push(predicate.column).push(" <= ").push_bind(*ts);
            }
        }
    }
}

/// Escape character named in the `ESCAPE` clause. Not a backslash, so the
/// pattern means the same under `NO_BACKSLASH_ESCAPES`.
const LIKE_ESCAPE: char = '!';

/// `%value%` in lower case, with `%`, `_` and the escape character escaped
pub(crate) fn like_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('%');
    for ch in value.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl<T> ListingSource<T> for MySqlListingSource<T>
where
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin + 'static,
{
    async fn fetch_rows(
        &self,
        predicates: &PredicateSet,
        order_by: &'static str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<T>> {
        let mut qb = QueryBuilder::<MySql>::new(format!(
            "SELECT {} FROM {}",
            self.spec.columns, self.spec.table
        ));
        push_predicates(&mut qb, predicates);
        qb.push(" ORDER BY ")
            .push(order_by)
            .push(" DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = qb.build_query_as::<T>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn count_rows(&self, predicates: &PredicateSet) -> Result<i64> {
        let mut qb = QueryBuilder::<MySql>::new(format!("SELECT COUNT(*) FROM {}", self.spec.table));
        push_predicates(&mut qb, predicates);

        let count: i64 = qb.build_query_scalar().fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn sum_rows(&self, predicates: &PredicateSet, column: &'static str) -> Result<Decimal> {
        let mut qb = QueryBuilder::<MySql>::new(format!(
            "SELECT SUM({}) FROM {}",
            column, self.spec.table
        ));
        push_predicates(&mut qb, predicates);

        let sum: Option<Decimal> = qb.build_query_scalar().fetch_one(&self.pool).await?;
        Ok(sum.unwrap_or_default())
    }
}
