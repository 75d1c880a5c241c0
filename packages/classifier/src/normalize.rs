//! Accent folding for the relevance screen.
//!
//! Article text is decomposed (NFD), combining marks are dropped and the
//! result is lowercased, so "Viabilità" and "viabilita" compare equal and
//! screen patterns can be written in plain ASCII.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization as _;
use unicode_normalization::char::is_combining_mark;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Folds accents, lowercases and collapses runs of whitespace.
#[must_use]
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    WHITESPACE_RE.replace_all(&folded, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize("Viabilità  Cittadina"), "viabilita cittadina");
        assert_eq!(normalize("PERCHÉ è così"), "perche e cosi");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  scontro \n\t frontale "), "scontro frontale");
        assert_eq!(normalize(""), "");
    }
}
