//! Title Token Extraction

use regex::Regex;
use std::sync::LazyLock;

/// A space, a run of ASCII letters, then a period
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ([A-Za-z]+)\.").expect("title pattern compiles"));

/// Extract the honorific from a passenger name.
///
/// Returns the first run of ASCII letters that directly follows a space and
/// is directly followed by a period: `"Smith, Mr. John"` gives `"Mr"`.
pub fn extract_title(name: &str) -> Option<&str> {
    TITLE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
