//! Comment text cleanup

use regex::Regex;
use std::sync::LazyLock;

/// An anchor element, optionally wrapped in square brackets as timestamp links are.
///
/// The bracketed form only matches a single tag with a plain label, so it never
/// spans text between two anchors.
static ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[<a href="[^"]*">[^<]*</a>\]|<a href=".*?">.*?</a>"#)
        .expect("valid anchor pattern")
});

/// Remove every `<a href="...">label</a>` fragment and trim the result.
///
/// Removal repeats until nothing matches, so
/// `sanitize_comment(&sanitize_comment(s)) == sanitize_comment(s)`.
pub fn sanitize_comment(raw: &str) -> String {
    let mut text = raw.to_string();
    while ANCHOR.is_match(&text) {
        text = ANCHOR.replace_all(&text, "").into_owned();
    }
    text.trim().to_string()
}

/// Fold line breaks so a comment occupies exactly one output line
pub fn single_line(text: &str) -> String {
    if !text.contains(['\r', '\n']) {
        return text.to_string();
    }
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
