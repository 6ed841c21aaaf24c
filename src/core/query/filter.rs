//! Filter tables and predicate construction for listing surfaces.
//!
//! A listing surface is described once by a static [`ListingSpec`]. Incoming
//! filter values are matched against its field table; each recognised, present
//! and parseable value becomes exactly one [`Predicate`]. Everything else is
//! dropped without error.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a filter value is compared against its column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Case-insensitive substring, wildcard on both sides
    Substring,
    /// Equality on a text column
    Exact,
    /// Boolean column; only `true`/`false` (string or bool) apply
    Flag,
    /// Inclusive lower bound on a timestamp column
    From,
    /// Inclusive upper bound on a timestamp column
    To,
}

/// One row of a surface's filter table
#[derive(Debug, Clone, Copy)]
pub struct FilterField {
    pub key: &'static str,
    pub column: &'static str,
    pub kind: FilterKind,
}

impl FilterField {
    pub const fn new(key: &'static str, column: &'static str, kind: FilterKind) -> Self {
        Self { key, column, kind }
    }
}

/// Static description of one listing surface
#[derive(Debug)]
pub struct ListingSpec {
    pub name: &'static str,
    pub table: &'static str,
    /// Column list for the SELECT clause (`*` allowed)
    pub columns: &'static str,
    /// Expression rows are ordered by, most recent first
    pub order_by: &'static str,
    pub filters: &'static [FilterField],
}

impl ListingSpec {
    /// Translate raw filter values into the predicate set for this surface.
    pub fn build_predicates(&self, filters: &ListingFilter) -> PredicateSet {
        let predicates = self
            .filters
            .iter()
            .filter_map(|field| {
                let value = filters.get(field.key)?;
                let comparison = comparison_for(field.kind, value)?;
                Some(Predicate {
                    column: field.column,
                    comparison,
                })
            })
            .collect();

        PredicateSet(predicates)
    }
}

fn comparison_for(kind: FilterKind, value: &Value) -> Option<Comparison> {
    match kind {
        FilterKind::Substring => non_empty_text(value).map(Comparison::ContainsIgnoreCase),
        FilterKind::Exact => non_empty_text(value).map(|v| Comparison::Equals(FilterValue::Text(v))),
        FilterKind::Flag => parse_flag(value).map(|b| Comparison::Equals(FilterValue::Bool(b))),
        FilterKind::From => non_empty_text(value)
            .and_then(|v| parse_bound(&v, Bound::Lower))
            .map(Comparison::AtLeast),
        FilterKind::To => non_empty_text(value)
            .and_then(|v| parse_bound(&v, Bound::Upper))
            .map(Comparison::AtMost),
    }
}

fn non_empty_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Accepts `true`/`false` as JSON booleans or their literal string forms.
pub fn parse_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[derive(Clone, Copy)]
enum Bound {
    Lower,
    Upper,
}

/// A date-only upper bound covers the whole day.
fn parse_bound(raw: &str, bound: Bound) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let time = match bound {
        Bound::Lower => NaiveTime::MIN,
        Bound::Upper => NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999)?,
    };
    Some(date.and_time(time).and_utc())
}

/// Raw filter values keyed by filter name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingFilter(BTreeMap<String, Value>);

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Build from a query string map, dropping the pagination keys.
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let values = query
            .iter()
            .filter(|(key, _)| key.as_str() != "page" && key.as_str() != "limit")
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();
        Self(values)
    }
}

/// Value compared for equality
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Equals(FilterValue),
    /// Stored trimmed, original case
    ContainsIgnoreCase(String),
    AtLeast(DateTime<Utc>),
    AtMost(DateTime<Utc>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: &'static str,
    pub comparison: Comparison,
}

/// Conjunction of predicates; empty means "match everything"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredicateSet(Vec<Predicate>);

impl PredicateSet {
    pub fn iter(&self) -> impl Iterator<Item = &Predicate> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
