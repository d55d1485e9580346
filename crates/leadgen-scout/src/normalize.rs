//! Text cleanup shared by the provider normalizers.

use std::sync::LazyLock;

use regex::Regex;

/// NewsAPI cuts `content` at ~200 chars and appends `[+1234 chars]`.
static TRUNCATION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[\+\d+ chars\]\s*$").expect("valid regex"));

/// Trim a field and collapse blank values to `None`.
pub(crate) fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Clean an article body, removing a trailing truncation marker if present.
pub(crate) fn clean_content(value: Option<String>) -> Option<String> {
    clean(value.map(|v| TRUNCATION_MARKER.replace(&v, "").into_owned()))
}

/// NewsAPI keeps deleted articles in results as `[Removed]` stubs.
pub(crate) fn is_removed_stub(title: Option<&str>, url: &str) -> bool {
    title.is_some_and(|t| t.trim() == "[Removed]") || url.contains("removed.com")
}
