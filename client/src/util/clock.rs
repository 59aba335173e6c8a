//! Wall-clock helpers for ids, timestamps and booking dates.
//!
//! In the browser the clock comes from `Date.now()`; native builds (SSR,
//! tests) read `SystemTime`.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

/// Milliseconds since the Unix epoch.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_millis() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now().max(0.0) as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Offset of the visitor's local time from UTC, in minutes.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn local_offset_minutes() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        // JS reports UTC minus local.
        -(js_sys::Date::new_0().get_timezone_offset() as i64)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

#[must_use]
pub fn datetime_from_millis(ms: u64) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000).unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

/// RFC 3339 UTC timestamp for `ms`.
#[must_use]
pub fn rfc3339_from_millis(ms: u64) -> String {
    datetime_from_millis(ms).format(&Rfc3339).unwrap_or_default()
}

#[must_use]
pub fn now_rfc3339() -> String {
    rfc3339_from_millis(now_millis())
}

/// Calendar date at `ms` shifted by `offset_minutes`.
#[must_use]
pub fn local_date_at(ms: u64, offset_minutes: i64) -> Date {
    (datetime_from_millis(ms) + Duration::minutes(offset_minutes)).date()
}

/// Today's date in the visitor's time zone.
#[must_use]
pub fn today() -> Date {
    local_date_at(now_millis(), local_offset_minutes())
}

/// Parse a `YYYY-MM-DD` value as produced by `<input type="date">`.
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

#[must_use]
pub fn format_iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]")).unwrap_or_default()
}
