//! Text helpers for card copy.

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static regex"));
static SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Strip HTML tags from a rich-text description and collapse whitespace.
pub fn strip_html(html: &str) -> String {
    let text = TAG.replace_all(html, "");
    SPACE.replace_all(text.trim(), " ").into_owned()
}
