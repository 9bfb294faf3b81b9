use regex::Regex;
use std::sync::LazyLock;

// Leading non-alphanumerics, the alphanumeric core, trailing non-alphanumerics.
static EDGES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^[^\p{L}\p{Nd}]*([\p{L}\p{Nd}](?:.*[\p{L}\p{Nd}])?)[^\p{L}\p{Nd}]*$")
        .expect("edge pattern is valid")
});

/// Strips leading and trailing characters that are neither letters nor digits.
///
/// Interior punctuation is kept (`"well-known"`, `"don't"`). Single characters
/// and words without any letter or digit are returned unchanged.
pub fn strip(word: &str) -> &str {
    if word.chars().count() <= 1 {
        return word;
    }
    EDGES
        .captures(word)
        .and_then(|caps| caps.get(1))
        .map_or(word, |core| core.as_str())
}
