//! Timestamp formatting for output file and directory names.

use chrono::{DateTime, Utc};

/// Format a UTC timestamp.
///
/// Compact forms (`20240102_030405`) are safe for file names; the long forms
/// are ISO-8601. `sub_second` appends microseconds.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use scrivener_core::utc_as_string;
///
/// let dt = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
/// assert_eq!(utc_as_string(&dt, true, false), "20240102_030405");
/// assert_eq!(utc_as_string(&dt, false, false), "2024-01-02T03:04:05Z");
/// ```
pub fn utc_as_string(dt: &DateTime<Utc>, compact: bool, sub_second: bool) -> String {
    let format = match (compact, sub_second) {
        (true, false) => "%Y%m%d_%H%M%S",
        (true, true) => "%Y%m%d_%H%M%S.%6f",
        (false, false) => "%Y-%m-%dT%H:%M:%SZ",
        (false, true) => "%Y-%m-%dT%H:%M:%S.%6fZ",
    };
    dt.format(format).to_string()
}

/// Current time in the compact form.
pub fn utc_now_compact() -> String {
    utc_as_string(&Utc::now(), true, false)
}
