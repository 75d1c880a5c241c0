//! Death and injury estimation from article text.
//!
//! The extractor favours under-counting over over-counting:
//!
//! 1. If any [`NEGATIVE_CONTEXT_RULES`] pattern matches (war, attacks,
//!    homicide, disease), the whole text yields [`CasualtyEstimate::NONE`].
//! 2. Generic rules with no incident-noun qualifier only run when the text
//!    reads as an accident report (see [`is_accident_context`]).
//! 3. Every match contributes its captured numeral, or 1 when the rule has
//!    no numeral group. Valid figures are collected into a set of
//!    *distinct values* and summed, so the same figure reported through
//!    several phrasings counts once.
//! 4. The sums are clamped to the per-article ceilings of
//!    [`CasualtyEstimate`].

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use road_watch_incident_models::CasualtyEstimate;

/// One entry of a casualty rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CasualtyRule {
    /// Short identifier, used in logs and tests.
    pub name: &'static str,
    /// Regex source. Capture group 1, when present, is the reported count.
    pub pattern: &'static str,
    /// Whether the rule only runs on texts that read as accident reports.
    pub requires_accident_context: bool,
}

impl CasualtyRule {
    /// Whether this rule participates for the given context flag.
    #[must_use]
    pub const fn is_active(&self, accident_context: bool) -> bool {
        accident_context || !self.requires_accident_context
    }
}

/// Non-traffic contexts. Any match suppresses all extraction.
pub const NEGATIVE_CONTEXT_RULES: &[CasualtyRule] = &[
    CasualtyRule {
        name: "dead_in_violence",
        pattern: r"(?i)\bmort[aeio]\s+(?:in|durante|per)\s+(?:(?:un|una|uno|la|il|lo)\s+|l['’]\s*)?(?:guerra|battaglia|strage|attentato|omicidio)",
        requires_accident_context: false,
    },
    CasualtyRule {
        name: "injured_in_violence",
        pattern: r"(?i)\bferit[aeio]\s+(?:in|durante|per)\s+(?:(?:un|una|uno|la|il|lo)\s+|l['’]\s*)?(?:guerra|battaglia|strage|attentato)",
        requires_accident_context: false,
    },
    CasualtyRule {
        name: "victims_of_violence",
        pattern: r"(?i)\bvittim[ae]\s+(?:(?:di|della|del)\s+|dell['’]\s*)(?:(?:un|una|uno|la|il|lo)\s+|l['’]\s*)?(?:guerra|violenza|omicidio|strage)",
        requires_accident_context: false,
    },
    CasualtyRule {
        name: "dead_of_illness",
        pattern: r"(?i)\bmort[aeio]\s+(?:per|a\s+causa\s+di)\s+(?:(?:un|una)\s+)?(?:malattia|cancro|infarto|ictus)",
        requires_accident_context: false,
    },
];

/// Death rules, evaluated in order.
pub const DEATH_RULES: &[CasualtyRule] = &[
    CasualtyRule {
        name: "numeral_people_dead",
        pattern: r"(?i)\b(\d+)\s+person[ae]\s+(?:mort[ae]|decedut[ae]|hanno\s+perso\s+la\s+vita)\b",
        requires_accident_context: false,
    },
    CasualtyRule {
        name: "numeral_dead_in_accident",
        pattern: r"(?i)\b(\d+)\s+(?:mort[io]|decedut[io]|vittim[ae])\s+(?:(?:in|nel|nello)\s+|nell['’]\s*)(?:incidente|sinistro|scontro|schianto)\b",
        requires_accident_context: false,
    },
    CasualtyRule {
        name: "dead_in_accident",
        pattern: r"(?i)\b(?:mort[io]|decedut[io]|ha\s+perso\s+la\s+vita|hanno\s+perso\s+la\s+vita)\s+(?:(?:in|nel|nello)\s+|nell['’]\s*)(?:incidente|sinistro|scontro|schianto)\b",
        requires_accident_context: false,
    },
    CasualtyRule {
        name: "single_dead_in_accident",
        pattern: r"(?i)\b(?:un|una|uno)\s+(?:mort[io]|decedut[io]|vittima)\s+(?:(?:in|nel|nello)\s+|nell['’]\s*)(?:incidente|sinistro|scontro|schianto)\b",
        requires_accident_context: false,
    },
    CasualtyRule {
        name: "numeral_dead",
        pattern: r"(?i)\b(\d+)\s+(?:mort[io]|decedut[io]|vittim[ae])\b",
        requires_accident_context: true,
    },
    CasualtyRule {
        name: "single_dead",
        pattern: r"(?i)\b(?:un|una|uno)\s+(?:mort[io]|decedut[io]|vittima)\b",
        requires_accident_context: true,
    },
    CasualtyRule {
        name: "dead_in_hospital",
        pattern: r"(?i)\b(?:mort[io]|decedut[io])\s+(?:(?:in|nel|nello)\s+|nell['’]\s*)(?:ospedale|pronto\s+soccorso)\b",
        requires_accident_context: true,
    },
];

/// Injury rules, evaluated in order.
pub const INJURY_RULES: &[CasualtyRule] = &[
    CasualtyRule {
        name: "numeral_people_injured",
        pattern: r"(?i)\b(\d+)\s+person[ae]\s+(?:ferit[ae]|les[ae]|rimast[ae]\s+ferit[ae])\b",
        requires_accident_context: false,
    },
    CasualtyRule {
        name: "numeral_injured_in_accident",
        pattern: r"(?i)\b(\d+)\s+(?:ferit[io]|les[io])\s+(?:(?:in|nel|nello)\s+|nell['’]\s*)(?:incidente|sinistro|scontro|schianto)\b",
        requires_accident_context: false,
    },
    CasualtyRule {
        name: "injured_in_accident",
        pattern: r"(?i)\b(?:ferit[io]|les[io]|rimast[io]\s+ferit[io])\s+(?:(?:in|nel|nello)\s+|nell['’]\s*)(?:incidente|sinistro|scontro|schianto)\b",
        requires_accident_context: false,
    },
    CasualtyRule {
        name: "single_injured_in_accident",
        pattern: r"(?i)\b(?:un|una|uno)\s+(?:ferit[io]|les[io])\s+(?:(?:in|nel|nello)\s+|nell['’]\s*)(?:incidente|sinistro|scontro|schianto)\b",
        requires_accident_context: false,
    },
    CasualtyRule {
        name: "hospital_transport",
        pattern: r"(?i)\b(?:trasportat[io]|soccors[io]|portat[io])\s+(?:(?:in|al)\s+|all['’]\s*)(?:ospedale|pronto\s+soccorso|ps)\b",
        requires_accident_context: false,
    },
    CasualtyRule {
        name: "numeral_injured",
        pattern: r"(?i)\b(\d+)\s+(?:ferit[io]|les[io])\b",
        requires_accident_context: true,
    },
    CasualtyRule {
        name: "some_injured",
        pattern: r"(?i)\b(?:un|una|uno|alcun[ie]|divers[ie])\s+(?:ferit[io]|les[io])\b",
        requires_accident_context: true,
    },
    CasualtyRule {
        name: "injured_in_hospital",
        pattern: r"(?i)\b(?:ferit[io]|les[io])\s+(?:(?:in|nel|nello)\s+|nell['’]\s*)(?:ospedale|pronto\s+soccorso|ps)\b",
        requires_accident_context: true,
    },
    CasualtyRule {
        name: "left_injured",
        pattern: r"(?i)\brimast[aeio]\s+(?:ferit[aeio]|les[aeio])\b",
        requires_accident_context: true,
    },
];

/// Valid per-figure range for deaths.
const DEATH_RANGE: RangeInclusive<u32> = 1..=50;

/// Valid per-figure range for injuries.
const INJURY_RANGE: RangeInclusive<u32> = 1..=100;

static ACCIDENT_CONTEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:incidente|sinistro|scontro|schianto|tamponamento|ribaltamento|collisione)\b",
    )
    .expect("valid regex")
});

/// Compiled patterns of one rule table, keyed by rule name.
type CompiledTable = BTreeMap<&'static str, Regex>;

fn compile(rules: &'static [CasualtyRule]) -> CompiledTable {
    rules
        .iter()
        .map(|rule| (rule.name, Regex::new(rule.pattern).expect("valid regex")))
        .collect()
}

static NEGATIVE_CONTEXT: LazyLock<CompiledTable> =
    LazyLock::new(|| compile(NEGATIVE_CONTEXT_RULES));
static DEATHS: LazyLock<CompiledTable> = LazyLock::new(|| compile(DEATH_RULES));
static INJURIES: LazyLock<CompiledTable> = LazyLock::new(|| compile(INJURY_RULES));

/// Returns `true` if `text` contains at least one accident-indicating term.
#[must_use]
pub fn is_accident_context(text: &str) -> bool {
    ACCIDENT_CONTEXT_RE.is_match(text)
}

/// Returns the name of the first negative-context rule matching `text`.
#[must_use]
pub fn negative_context(text: &str) -> Option<&'static str> {
    NEGATIVE_CONTEXT_RULES
        .iter()
        .find(|rule| {
            NEGATIVE_CONTEXT
                .get(rule.name)
                .is_some_and(|regex| regex.is_match(text))
        })
        .map(|rule| rule.name)
}

/// Rules of `table` that participate for the given context flag, in
/// evaluation order.
pub fn active_rules(
    table: &'static [CasualtyRule],
    accident_context: bool,
) -> impl Iterator<Item = &'static CasualtyRule> {
    table
        .iter()
        .filter(move |rule| rule.is_active(accident_context))
}

/// Estimates deaths and injuries reported by `text`.
#[must_use]
pub fn extract_casualties(text: &str) -> CasualtyEstimate {
    if let Some(rule) = negative_context(text) {
        log::trace!("casualty extraction suppressed by {rule}");
        return CasualtyEstimate::NONE;
    }

    let accident_context = is_accident_context(text);
    let deaths = sum_distinct(text, DEATH_RULES, &DEATHS, accident_context, &DEATH_RANGE);
    let injuries = sum_distinct(
        text,
        INJURY_RULES,
        &INJURIES,
        accident_context,
        &INJURY_RANGE,
    );

    CasualtyEstimate::clamped(deaths, injuries)
}

/// Sums the distinct valid figures produced by every match of every rule
/// [`active_rules`] yields for `table`.
fn sum_distinct(
    text: &str,
    table: &'static [CasualtyRule],
    compiled: &CompiledTable,
    accident_context: bool,
    valid: &RangeInclusive<u32>,
) -> u32 {
    let mut found = BTreeSet::new();

    for rule in active_rules(table, accident_context) {
        let Some(regex) = compiled.get(rule.name) else {
            continue;
        };
        for caps in regex.captures_iter(text) {
            let count = match caps.get(1) {
                Some(numeral) => match numeral.as_str().parse::<u32>() {
                    Ok(n) => n,
                    Err(_) => continue,
                },
                None => 1,
            };
            if valid.contains(&count) {
                found.insert(count);
            }
        }
    }

    found.iter().sum()
}
