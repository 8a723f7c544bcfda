//! Text helpers for logging.

/// Shorten `text` for log output.
///
/// Limits below 3 disable truncation. Otherwise text longer than `limit`
/// characters keeps its first `limit - 3` characters followed by `...`.
///
/// # Examples
///
/// ```
/// use scrivener_core::truncate_for_log;
///
/// assert_eq!(truncate_for_log("abcdefghij", 8), "abcde...");
/// assert_eq!(truncate_for_log("short", 8), "short");
/// assert_eq!(truncate_for_log("abcdefghij", 0), "abcdefghij");
/// ```
pub fn truncate_for_log(text: &str, limit: usize) -> String {
    if limit < 3 || text.chars().count() <= limit {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(limit - 3).collect();
    shortened.push_str("...");
    shortened
}
