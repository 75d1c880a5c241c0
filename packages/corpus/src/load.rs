//! Decoding and validation of incident records.

use std::path::Path;
use std::str::FromStr as _;

use chrono::NaiveDate;
use road_watch_incident_models::{Incident, Severity};
use serde::{Deserialize, Serialize};

use crate::{CorpusError, parse_records, read_records};

/// A record that failed decoding or validation and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("record #{index}: {reason}")]
pub struct RecordError {
    /// Position of the record in the corpus array.
    pub index: usize,
    /// Record identifier, when one could be read.
    pub id: Option<u64>,
    /// What was wrong with it.
    pub reason: String,
}

/// Result of loading a corpus: valid incidents plus per-record failures.
#[derive(Debug, Default)]
pub struct CorpusLoad {
    /// Records that decoded and validated, in corpus order.
    pub incidents: Vec<Incident>,
    /// Records that were skipped.
    pub errors: Vec<RecordError>,
}

/// Wire shape of one article.
///
/// The scraper also emits derived `year`, `month`, `month_name` and
/// `weekday` fields; they are ignored and recomputed from the date.
#[derive(Debug, Deserialize)]
struct RawIncident {
    id: Option<u64>,
    date: Option<String>,
    datetime: Option<String>,
    title: String,
    link: Option<String>,
    excerpt: Option<String>,
    content: Option<String>,
    severity: Option<String>,
    keywords: Option<Vec<String>>,
    roads: Option<Vec<String>>,
    cities: Option<Vec<String>>,
}

impl RawIncident {
    fn validate(self) -> Result<Incident, String> {
        let id = self.id.ok_or("missing id")?;
        let date = publication_date(self.date.as_deref(), self.datetime.as_deref())?;
        let severity = self.severity.ok_or("missing severity")?;
        let severity = Severity::from_str(severity.trim())
            .map_err(|_| format!("unknown severity '{severity}'"))?;

        Ok(Incident {
            id,
            date,
            title: self.title,
            link: self.link,
            excerpt: self.excerpt.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            severity,
            keywords: self.keywords.unwrap_or_default(),
            roads: self.roads.unwrap_or_default(),
            cities: self.cities.unwrap_or_default(),
        })
    }
}

/// Resolves the publication date from `date`, falling back to the date
/// part of `datetime` (`YYYY-MM-DDTHH:MM:SS`). A blank `date` counts as
/// absent.
fn publication_date(date: Option<&str>, datetime: Option<&str>) -> Result<NaiveDate, String> {
    if let Some(date) = date.map(str::trim).filter(|d| !d.is_empty()) {
        return NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| format!("invalid date '{date}': {e}"));
    }
    let datetime = datetime.ok_or("missing date")?;
    datetime
        .trim()
        .get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .ok_or_else(|| format!("invalid datetime '{datetime}'"))
}

fn decode_record(index: usize, value: serde_json::Value) -> Result<Incident, RecordError> {
    let id = value.get("id").and_then(serde_json::Value::as_u64);
    let fail = |reason: String| RecordError { index, id, reason };

    let raw: RawIncident = serde_json::from_value(value).map_err(|e| fail(e.to_string()))?;
    raw.validate().map_err(fail)
}

/// Decodes a corpus document.
///
/// Each array element is decoded on its own; a bad element becomes a
/// [`RecordError`] and is skipped.
///
/// # Errors
///
/// Returns [`CorpusError`] if the document is not JSON or not an array.
pub fn parse_incidents(json: &str) -> Result<CorpusLoad, CorpusError> {
    let records = parse_records(json)?;
    Ok(decode_records(records))
}

/// Reads and decodes a corpus file.
///
/// # Errors
///
/// Returns [`CorpusError`] if the file cannot be read or is not a JSON
/// array.
pub fn load_incidents(path: &Path) -> Result<CorpusLoad, CorpusError> {
    let load = decode_records(read_records(path)?);
    log::info!(
        "Loaded {} incidents from {} ({} skipped)",
        load.incidents.len(),
        path.display(),
        load.errors.len()
    );
    Ok(load)
}

fn decode_records(records: Vec<serde_json::Value>) -> CorpusLoad {
    let mut load = CorpusLoad::default();
    for (index, value) in records.into_iter().enumerate() {
        match decode_record(index, value) {
            Ok(incident) => load.incidents.push(incident),
            Err(e) => {
                log::debug!("Skipping {e}");
                load.errors.push(e);
            }
        }
    }
    load
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = r#"[
        {
            "id": 101,
            "date": "2024-03-04",
            "datetime": "2024-03-04T08:15:00",
            "year": 1999,
            "month": 1,
            "month_name": "gennaio",
            "weekday": "domenica",
            "title": "Scontro tra moto e auto, 2 feriti",
            "link": "https://example.org/101",
            "excerpt": "Sulla provinciale",
            "content": "I due feriti sono stati trasportati in ospedale.",
            "severity": "moderato",
            "keywords": ["scontro"],
            "roads": ["SP 231"],
            "cities": ["Bari"]
        },
        {
            "id": 102,
            "datetime": "2024-03-05T22:40:00",
            "title": "Tamponamento in tangenziale",
            "severity": "Informativo"
        },
        {
            "id": 103,
            "date": "2024-13-01",
            "title": "Data sbagliata",
            "severity": "grave"
        },
        {
            "id": 104,
            "date": "2024-03-06",
            "title": "Gravità sconosciuta",
            "severity": "catastrofico"
        },
        {
            "date": "2024-03-06",
            "title": "Senza id",
            "severity": "fatale"
        },
        {
            "id": 106,
            "date": "2024-03-06",
            "title": 42,
            "severity": "fatale"
        }
    ]"#;

    #[test]
    fn valid_records_decode_and_bad_ones_are_reported() {
        let load = parse_incidents(CORPUS).unwrap();
        assert_eq!(
            load.incidents.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![101, 102]
        );
        assert_eq!(
            load.errors.iter().map(|e| e.index).collect::<Vec<_>>(),
            vec![2, 3, 4, 5]
        );
        assert_eq!(load.errors[0].id, Some(103));
        assert!(load.errors[0].reason.contains("invalid date"));
        assert!(load.errors[1].reason.contains("unknown severity"));
        assert_eq!(load.errors[2].id, None);
        assert!(load.errors[2].reason.contains("missing id"));
        assert_eq!(load.errors[3].id, Some(106));
    }

    #[test]
    fn derived_fields_come_from_the_date() {
        let load = parse_incidents(CORPUS).unwrap();
        let first = &load.incidents[0];
        assert_eq!(first.year(), 2024);
        assert_eq!(first.month_key(), "2024-03");
        assert_eq!(first.severity, Severity::Injury);
        assert_eq!(first.roads, vec!["SP 231".to_string()]);
        assert_eq!(first.link.as_deref(), Some("https://example.org/101"));
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let load = parse_incidents(CORPUS).unwrap();
        let second = &load.incidents[1];
        assert_eq!(second.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(second.severity, Severity::Informational);
        assert!(second.excerpt.is_empty());
        assert!(second.content.is_empty());
        assert!(second.roads.is_empty());
        assert!(second.cities.is_empty());
        assert!(second.keywords.is_empty());
        assert!(second.link.is_none());
    }

    #[test]
    fn null_arrays_are_empty() {
        let load = parse_incidents(
            r#"[{"id": 1, "date": "2023-01-01", "title": "t", "severity": "fatal", "roads": null}]"#,
        )
        .unwrap();
        assert!(load.errors.is_empty());
        assert!(load.incidents[0].roads.is_empty());
    }

    #[test]
    fn blank_date_falls_back_to_datetime() {
        let load = parse_incidents(
            r#"[
                {"id": 1, "date": "  ", "datetime": "2023-07-14T18:30:00", "title": "t", "severity": "grave"},
                {"id": 2, "date": "", "title": "t", "severity": "grave"}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            load.incidents[0].date,
            NaiveDate::from_ymd_opt(2023, 7, 14).unwrap()
        );
        assert_eq!(load.errors.len(), 1);
        assert_eq!(load.errors[0].id, Some(2));
        assert!(load.errors[0].reason.contains("missing date"));
    }

    #[test]
    fn non_array_document_is_fatal() {
        assert!(matches!(
            parse_incidents(r#"{"id": 1}"#),
            Err(CorpusError::NotAnArray { found: "an object" })
        ));
        assert!(matches!(parse_incidents("not json"), Err(CorpusError::Json(_))));
    }

    #[test]
    fn record_error_display_names_the_record() {
        let err = RecordError {
            index: 3,
            id: None,
            reason: "missing id".to_string(),
        };
        assert_eq!(err.to_string(), "record #3: missing id");
    }
}
