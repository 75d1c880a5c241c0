//! Relevance cleaning of raw article records.
//!
//! Records stay as raw JSON objects so that fields this crate does not
//! model survive a clean round trip unchanged.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use road_watch_classifier::{RejectReason, ScreenVerdict, screen_article};
use serde::Serialize;
use serde_json::Value;

use crate::{CorpusError, write_records};

/// Number of removed records echoed in [`CleanReport::removed_samples`].
pub const REMOVED_SAMPLE_SIZE: usize = 10;

const SAMPLE_TITLE_CHARS: usize = 80;

/// A removed record, abbreviated for the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedSample {
    /// Record `id` as found in the input.
    pub id: Value,
    /// Title, truncated.
    pub title: String,
    /// Why the record was removed.
    pub reason: RejectReason,
}

/// Summary of a cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanReport {
    /// Records screened.
    pub total: usize,
    /// Records kept.
    pub kept: usize,
    /// Records removed.
    pub removed: usize,
    /// Removed records per reason. Every reason is present.
    pub removed_by_reason: BTreeMap<RejectReason, usize>,
    /// Removed records per off-topic rule name.
    pub removed_by_rule: BTreeMap<&'static str, usize>,
    /// Records per `year` field before cleaning.
    pub years_before: BTreeMap<i64, usize>,
    /// Records per `year` field after cleaning.
    pub years_after: BTreeMap<i64, usize>,
    /// First few removed records.
    pub removed_samples: Vec<RemovedSample>,
}

/// Kept and removed records with the run's report.
#[derive(Debug, Clone, Default)]
pub struct CleanOutcome {
    /// Records that passed the screen, in input order.
    pub kept: Vec<Value>,
    /// Records that were rejected, in input order.
    pub removed: Vec<Value>,
    /// Summary.
    pub report: CleanReport,
}

fn text_field<'a>(record: &'a Value, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn record_text(record: &Value) -> String {
    format!(
        "{} {} {}",
        text_field(record, "title"),
        text_field(record, "excerpt"),
        text_field(record, "content")
    )
}

fn record_year(record: &Value) -> Option<i64> {
    match record.get("year")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn count_years<'a>(records: impl Iterator<Item = &'a Value>) -> BTreeMap<i64, usize> {
    let mut years = BTreeMap::new();
    for year in records.filter_map(record_year) {
        *years.entry(year).or_default() += 1;
    }
    years
}

/// Screens every record and splits the corpus.
#[must_use]
pub fn clean_records(records: Vec<Value>) -> CleanOutcome {
    let mut report = CleanReport {
        total: records.len(),
        removed_by_reason: RejectReason::all().iter().map(|r| (*r, 0)).collect(),
        years_before: count_years(records.iter()),
        ..CleanReport::default()
    };
    let mut kept = Vec::new();
    let mut removed = Vec::new();

    for record in records {
        match screen_article(&record_text(&record)) {
            ScreenVerdict::Kept => kept.push(record),
            ScreenVerdict::Rejected { reason, rule } => {
                *report.removed_by_reason.entry(reason).or_default() += 1;
                if let Some(rule) = rule {
                    *report.removed_by_rule.entry(rule).or_default() += 1;
                }
                if report.removed_samples.len() < REMOVED_SAMPLE_SIZE {
                    report.removed_samples.push(RemovedSample {
                        id: record.get("id").cloned().unwrap_or(Value::Null),
                        title: text_field(&record, "title")
                            .chars()
                            .take(SAMPLE_TITLE_CHARS)
                            .collect(),
                        reason,
                    });
                }
                removed.push(record);
            }
        }
    }

    report.kept = kept.len();
    report.removed = removed.len();
    report.years_after = count_years(kept.iter());

    log::info!(
        "Screened {} records: kept {}, removed {}",
        report.total,
        report.kept,
        report.removed
    );
    for (reason, count) in &report.removed_by_reason {
        log::debug!("  removed as {reason}: {count}");
    }

    CleanOutcome {
        kept,
        removed,
        report,
    }
}

/// Path of the removed-records file written next to `output_path`:
/// `incidents.json` becomes `incidents_removed.json`.
#[must_use]
pub fn removed_path(output_path: &Path) -> PathBuf {
    let stem = output_path
        .file_stem()
        .map_or_else(|| "corpus".into(), |s| s.to_string_lossy());
    output_path.with_file_name(format!("{stem}_removed.json"))
}

/// Writes kept records to `output_path` and removed records to
/// [`removed_path`]`(output_path)`, creating the parent directory if
/// needed. Returns the removed-records path.
///
/// # Errors
///
/// Returns [`CorpusError`] if the directory or either file cannot be
/// written.
pub fn write_clean_outcome(
    outcome: &CleanOutcome,
    output_path: &Path,
) -> Result<PathBuf, CorpusError> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CorpusError::io(parent, e))?;
    }
    write_records(output_path, &outcome.kept)?;
    let removed = removed_path(output_path);
    write_records(&removed, &outcome.removed)?;
    log::info!(
        "Wrote {} kept records to {} and {} removed records to {}",
        outcome.kept.len(),
        output_path.display(),
        outcome.removed.len(),
        removed.display()
    );
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::read_records;

    fn sample() -> Vec<Value> {
        vec![
            json!({
                "id": 1,
                "year": 2023,
                "title": "Tamponamento sulla SP 231: auto contro furgone, due feriti",
                "source_tag": "keep-me",
            }),
            json!({
                "id": 2,
                "year": 2023,
                "title": "Investimenti pubblici per la nuova strada, incidente evitato",
            }),
            json!({
                "id": 3,
                "year": "2024",
                "title": "Incidente ferroviario sulla tratta",
                "excerpt": "auto ferme al passaggio a livello",
            }),
            json!({
                "id": 4,
                "year": 2024,
                "title": "Nuovo parcheggio per auto in centro",
            }),
            json!({
                "id": 5,
                "title": "Scontro tra moto e auto, 2 feriti",
            }),
        ]
    }

    #[test]
    fn splits_records_and_counts_reasons() {
        let outcome = clean_records(sample());
        let report = &outcome.report;

        assert_eq!(report.total, 5);
        assert_eq!(report.kept, 2);
        assert_eq!(report.removed, 3);
        assert_eq!(report.kept + report.removed, report.total);
        assert_eq!(report.removed_by_reason[&RejectReason::OffTopic], 2);
        assert_eq!(report.removed_by_reason[&RejectReason::MissingAccident], 1);
        assert_eq!(report.removed_by_reason[&RejectReason::PastIncidentOnly], 0);
        assert_eq!(report.removed_by_rule.values().sum::<usize>(), 2);
        assert_eq!(report.removed_by_rule.get("financial_investment"), Some(&1));

        assert_eq!(
            outcome.kept.iter().map(|r| r["id"].clone()).collect::<Vec<_>>(),
            vec![json!(1), json!(5)]
        );
        assert_eq!(outcome.kept[0]["source_tag"], "keep-me");
    }

    #[test]
    fn years_counted_before_and_after() {
        let report = clean_records(sample()).report;
        assert_eq!(report.years_before.get(&2023), Some(&2));
        assert_eq!(report.years_before.get(&2024), Some(&2));
        assert_eq!(report.years_after.get(&2023), Some(&1));
        assert_eq!(report.years_after.get(&2024), None);
    }

    #[test]
    fn samples_carry_id_and_truncated_title() {
        let long_title = "Investimenti pubblici ".repeat(10);
        let outcome = clean_records(vec![json!({"id": "x-9", "title": long_title})]);
        let sample = &outcome.report.removed_samples[0];
        assert_eq!(sample.id, json!("x-9"));
        assert_eq!(sample.title.chars().count(), SAMPLE_TITLE_CHARS);
        assert_eq!(sample.reason, RejectReason::OffTopic);
    }

    #[test]
    fn empty_input_gives_zero_report() {
        let outcome = clean_records(Vec::new());
        assert_eq!(outcome.report.total, 0);
        assert!(outcome.kept.is_empty());
        assert!(outcome.report.removed_by_reason.values().all(|&n| n == 0));
        assert_eq!(outcome.report.removed_by_reason.len(), RejectReason::all().len());
    }

    #[test]
    fn removed_file_sits_next_to_output() {
        assert_eq!(
            removed_path(Path::new("data/incidents.json")),
            PathBuf::from("data/incidents_removed.json")
        );
    }

    #[test]
    fn writes_kept_and_removed_files() {
        let dir = std::env::temp_dir().join(format!("road_watch_clean_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let output = dir.join("clean.json");

        let outcome = clean_records(sample());
        let removed = write_clean_outcome(&outcome, &output).unwrap();

        assert_eq!(removed, dir.join("clean_removed.json"));
        assert_eq!(read_records(&output).unwrap(), outcome.kept);
        assert_eq!(read_records(&removed).unwrap(), outcome.removed);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn creates_missing_output_directory() {
        let root = std::env::temp_dir().join(format!("road_watch_nested_{}", std::process::id()));
        let output = root.join("cleaned").join("2024").join("incidents.json");

        let outcome = clean_records(sample());
        let removed = write_clean_outcome(&outcome, &output).unwrap();

        assert_eq!(read_records(&output).unwrap(), outcome.kept);
        assert_eq!(read_records(&removed).unwrap(), outcome.removed);

        std::fs::remove_dir_all(&root).unwrap();
    }
}
