//! Per-article features attached when a record is first collected:
//! a severity guess, road and city mentions, and matched search keywords.

use std::sync::LazyLock;

use regex::Regex;
use road_watch_incident_models::Severity;
use serde::Serialize;

use crate::normalize::normalize;

/// Search keywords used to collect the corpus.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "incidente",
    "sinistro",
    "tamponamento",
    "investimento",
    "scontro",
    "travolto",
    "schianto",
    "ribaltamento",
    "feriti",
    "morto",
];

/// Most mentions kept per location kind.
pub const MAX_MENTIONS: usize = 5;

/// Substrings of the normalized text and the severity they imply.
const SEVERITY_KEYWORDS: &[(&str, Severity)] = &[
    ("morto", Severity::Fatal),
    ("morta", Severity::Fatal),
    ("decesso", Severity::Fatal),
    ("codice rosso", Severity::Serious),
    ("gravi", Severity::Serious),
    ("grave", Severity::Serious),
    ("feriti", Severity::Injury),
    ("ferito", Severity::Injury),
];

static ROAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:sp\s?\d+|ss\s?\d+|ex\s?\d+|strada\s+provinciale\s+\d+|strada\s+statale\s+\d+|via\s+[A-ZÀ-Ù][^,.;]+|piazza\s+[A-ZÀ-Ù][^,.;]+)",
    )
    .expect("valid regex")
});

static CITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:Corato|Andria|Ruvo|Bisceglie|Trani|Bari|Bitonto|Altamura|Terlizzi|Giovinazzo|Molfetta|Barletta|Canosa)\b",
    )
    .expect("valid regex")
});

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Road and city mentions found in an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Locations {
    /// Road mentions (`SP 231`, `via Roma`), in order of appearance.
    pub roads: Vec<String>,
    /// Known city names, in order of appearance.
    pub cities: Vec<String>,
}

/// Features derived for one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFeatures {
    /// Keyword-based severity guess.
    pub severity: Severity,
    /// Search keywords present in the text.
    pub keywords: Vec<String>,
    /// Road and city mentions.
    #[serde(flatten)]
    pub locations: Locations,
}

/// Guesses severity from the most severe keyword in `text`.
///
/// Returns [`Severity::Informational`] when no keyword appears.
#[must_use]
pub fn guess_severity(text: &str) -> Severity {
    let normalized = normalize(text);
    SEVERITY_KEYWORDS
        .iter()
        .filter(|(keyword, _)| normalized.contains(keyword))
        .map(|(_, severity)| *severity)
        .max()
        .unwrap_or(Severity::Informational)
}

/// Returns the `keywords` that occur in `text`, in the given order.
#[must_use]
pub fn flag_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> Vec<String> {
    let normalized = normalize(text);
    keywords
        .iter()
        .map(|keyword| keyword.as_ref())
        .filter(|keyword| {
            let keyword = normalize(keyword);
            !keyword.is_empty() && normalized.contains(&keyword)
        })
        .map(str::to_string)
        .collect()
}

/// Collects up to [`MAX_MENTIONS`] distinct matches of `pattern`, comparing
/// case-insensitively and keeping the first spelling seen.
fn mentions(pattern: &Regex, text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in pattern.find_iter(text) {
        let mention = WHITESPACE_RE.replace_all(m.as_str().trim(), " ").into_owned();
        if !found.iter().any(|f| f.to_lowercase() == mention.to_lowercase()) {
            found.push(mention);
        }
        if found.len() >= MAX_MENTIONS {
            break;
        }
    }
    found
}

/// Finds road and city mentions in `text`.
#[must_use]
pub fn detect_locations(text: &str) -> Locations {
    Locations {
        roads: mentions(&ROAD_RE, text),
        cities: mentions(&CITY_RE, text),
    }
}

/// Derives every feature for `text`, flagging `keywords`.
#[must_use]
pub fn enrich_article<S: AsRef<str>>(text: &str, keywords: &[S]) -> ArticleFeatures {
    ArticleFeatures {
        severity: guess_severity(text),
        keywords: flag_keywords(text, keywords),
        locations: detect_locations(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_severe_keyword_wins() {
        assert_eq!(guess_severity("Due feriti, uno è morto in ospedale"), Severity::Fatal);
        assert_eq!(guess_severity("Ferito in codice rosso"), Severity::Serious);
        assert_eq!(guess_severity("Tre feriti lievi"), Severity::Injury);
        assert_eq!(guess_severity("Auto in fiamme, nessuno coinvolto"), Severity::Informational);
    }

    #[test]
    fn severity_keywords_match_substrings_of_folded_text() {
        // "gravissime" contains "gravi".
        assert_eq!(guess_severity("Condizioni GRAVISSIME"), Severity::Serious);
        assert_eq!(guess_severity("Il DECESSO è avvenuto all'alba"), Severity::Fatal);
    }

    #[test]
    fn flags_keywords_in_given_order() {
        let text = "Schianto in tangenziale: un Ferito, auto travolto dal tir";
        assert_eq!(
            flag_keywords(text, DEFAULT_KEYWORDS),
            vec!["travolto".to_string(), "schianto".to_string()]
        );
        assert!(flag_keywords(text, &["velocità", ""]).is_empty());
        assert_eq!(flag_keywords("Alta velocita", &["velocità"]), vec!["velocità"]);
    }

    #[test]
    fn road_mentions_stop_at_punctuation() {
        let locations =
            detect_locations("Scontro sulla SP 231, poi in via Roma vicino alla stazione. Chiusa la SS16");
        assert_eq!(
            locations.roads,
            vec![
                "SP 231".to_string(),
                "via Roma vicino alla stazione".to_string(),
                "SS16".to_string(),
            ]
        );
    }

    #[test]
    fn mentions_are_deduplicated_case_insensitively() {
        let locations = detect_locations("Corato, CORATO e poi Andria; ancora corato");
        assert_eq!(locations.cities, vec!["Corato".to_string(), "Andria".to_string()]);
        assert!(locations.roads.is_empty());
    }

    #[test]
    fn at_most_five_mentions_per_kind() {
        let text = "Corato, Andria, Ruvo, Bisceglie, Trani, Bari, Bitonto. \
                    sp 1, sp 2, sp 3, sp 4, sp 5, sp 6";
        let locations = detect_locations(text);
        assert_eq!(locations.cities.len(), MAX_MENTIONS);
        assert_eq!(locations.cities.last().map(String::as_str), Some("Trani"));
        assert_eq!(locations.roads.len(), MAX_MENTIONS);
        assert_eq!(locations.roads[4], "sp 5");
    }

    #[test]
    fn enrich_combines_every_feature() {
        let features = enrich_article(
            "Tamponamento in via Bari a Corato: due feriti",
            DEFAULT_KEYWORDS,
        );
        assert_eq!(features.severity, Severity::Injury);
        assert_eq!(features.keywords, vec!["tamponamento", "feriti"]);
        assert_eq!(features.locations.roads, vec!["via Bari a Corato: due feriti"]);
        assert_eq!(features.locations.cities, vec!["Bari", "Corato"]);
    }
}
