#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Road incident corpus I/O.
//!
//! The corpus is a JSON array of scraped articles. [`load`] decodes it into
//! validated [`Incident`](road_watch_incident_models::Incident) values,
//! reporting bad records individually instead of failing the whole file.
//! [`clean`] runs the relevance screen over raw records and splits the
//! corpus into kept and removed articles.

pub mod clean;
pub mod load;

pub use clean::{CleanOutcome, CleanReport, clean_records, write_clean_outcome};
pub use load::{CorpusLoad, RecordError, load_incidents, parse_incidents};

use std::path::Path;

/// Errors that can occur while reading or writing a corpus file.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// Reading or writing a corpus file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File that could not be accessed.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is valid JSON but not an array of records.
    #[error("Expected a JSON array of records, found {found}")]
    NotAnArray {
        /// JSON type found at the top level.
        found: &'static str,
    },
}

impl CorpusError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Reads a corpus file as a list of raw JSON records.
///
/// # Errors
///
/// Returns [`CorpusError`] if the file cannot be read, is not JSON, or is
/// not a JSON array.
pub fn read_records(path: &Path) -> Result<Vec<serde_json::Value>, CorpusError> {
    let text = std::fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
    parse_records(&text)
}

fn parse_records(json: &str) -> Result<Vec<serde_json::Value>, CorpusError> {
    match serde_json::from_str(json)? {
        serde_json::Value::Array(records) => Ok(records),
        other => Err(CorpusError::NotAnArray {
            found: json_type(&other),
        }),
    }
}

const fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

fn write_records(path: &Path, records: &[serde_json::Value]) -> Result<(), CorpusError> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).map_err(|e| CorpusError::io(path, e))
}
