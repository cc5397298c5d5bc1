//! Small shared helpers.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

/// Inclusive bounds of the civil month containing `now`: the month's first
/// instant and its last representable instant.
pub fn month_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc
        .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .unwrap();
    let next_month_start = if now.month() == 12 {
        Utc.with_ymd_and_hms(now.year() + 1, 1, 1, 0, 0, 0).unwrap()
    } else {
        Utc.with_ymd_and_hms(now.year(), now.month() + 1, 1, 0, 0, 0)
            .unwrap()
    };
    (start, next_month_start - Duration::nanoseconds(1))
}
