use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::core::{AppError, Result};
use crate::modules::payouts::models::DateWindow;

/// Days before `end` the default window starts (30 days inclusive)
pub const DEFAULT_TRAILING_DAYS: i64 = 29;

/// Resolve an optional (from, to) pair against today's UTC date.
pub fn resolve_window(from: Option<NaiveDate>, to: Option<NaiveDate>) -> DateWindow {
    resolve_window_at(from, to, Utc::now().date_naive())
}

/// Resolve against an explicit `today`.
///
/// `end` defaults to today and `start` to 29 days before `end`, clamped to the
/// earliest representable date. The bounds are independent and an inverted
/// window is returned unchanged.
pub fn resolve_window_at(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> DateWindow {
    let end = to.unwrap_or(today);
    let start = from.unwrap_or_else(|| {
        end.checked_sub_signed(Duration::days(DEFAULT_TRAILING_DAYS))
            .unwrap_or(NaiveDate::MIN)
    });
    DateWindow::new(start, end)
}

/// Parse a query-string date bound. Blank means absent.
pub fn parse_date_bound(field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|ts| Some(ts.with_timezone(&Utc).date_naive()))
        .map_err(|_| {
            AppError::validation(format!(
                "Invalid {} format: '{}'. Expected YYYY-MM-DD",
                field, raw
            ))
        })
}
