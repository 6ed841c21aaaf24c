//! Generic filtered-paginated review query shared by every admin listing.

pub mod filter;
pub mod mysql_source;
pub mod page_query;

pub use filter::{
    Comparison, FilterField, FilterKind, FilterValue, ListingFilter, ListingSpec, Predicate,
    PredicateSet,
};
pub use mysql_source::MySqlListingSource;
pub use page_query::FilteredPageQuery;

use std::collections::HashMap;

use crate::core::pagination::PageParams;

/// Split a listing query string into filter values and coerced pagination.
pub fn parse_listing_query(query: &HashMap<String, String>) -> (ListingFilter, PageParams) {
    let params = PageParams::from_raw(
        query.get("page").map(String::as_str),
        query.get("limit").map(String::as_str),
    );
    (ListingFilter::from_query(query), params)
}
