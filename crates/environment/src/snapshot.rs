//! Snapshot formatting for environment logging.

/// Formats `(key, value)` pairs as `KEY=VALUE` entries, sorted and joined by `", "`.
///
/// Entries are sorted as whole `KEY=VALUE` strings in byte order, so output is
/// reproducible for identical inputs regardless of iteration order.
pub fn format_snapshot<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut lines: Vec<String> = entries
        .into_iter()
        .map(|(k, v)| format!("{}={}", k.as_ref(), v.as_ref()))
        .collect();
    lines.sort_unstable();
    lines.join(", ")
}
