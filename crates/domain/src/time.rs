//! Time and timestamp helpers.

use chrono::{DateTime, TimeZone, Utc};

/// UTC timestamp used for `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Midnight UTC of the given calendar day.
///
/// Out-of-range dates collapse to the Unix epoch.
#[must_use]
pub fn midnight(year: i32, month: u32, day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}
