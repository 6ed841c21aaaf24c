use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;

/// Page/limit pair after coercion. Both are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageParams {
    /// Build from numeric values; anything below 1 falls back to the default.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: coerce(page, DEFAULT_PAGE),
            limit: coerce(limit, DEFAULT_LIMIT),
        }
    }

    /// Build from raw query-string values. Missing, non-numeric and
    /// non-positive input silently becomes the default.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| raw.and_then(|v| v.trim().parse::<i64>().ok());

        Self {
            page: parse(page).map_or(DEFAULT_PAGE, |p| coerce(p, DEFAULT_PAGE)),
            limit: parse(limit).map_or(DEFAULT_LIMIT, |l| coerce(l, DEFAULT_LIMIT)),
        }
    }

    /// Rows to skip; saturates at `i64::MAX` for pages far past any data
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1).saturating_mul(i64::from(self.limit))
    }
}

fn coerce(value: i64, default: u32) -> u32 {
    if value < 1 {
        return default;
    }
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Page envelope returned by every listing surface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Count of all matching rows, independent of page/limit
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, params: PageParams) -> Self {
        Self {
            items,
            total,
            page: params.page,
            limit: params.limit,
        }
    }

    pub fn empty(params: PageParams) -> Self {
        Self::new(Vec::new(), 0, params)
    }
}
