#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Road incident record types and the closed vocabularies shared across the
//! road-watch workspace.
//!
//! An [`Incident`] is one news article about a road incident, already
//! decoded and validated by the corpus layer. The classifier and analytics
//! crates only ever read these values.

use chrono::{Datelike as _, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Severity assigned to an incident by the upstream article classifier.
///
/// Levels are ordered: `Informational < Injury < Serious < Fatal`. Parsing
/// accepts both the Italian labels used by the source dataset and the
/// English names, case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Severity {
    /// News item with no reported casualties
    #[serde(rename = "informational", alias = "informativo")]
    #[strum(to_string = "informational", serialize = "informativo")]
    Informational,
    /// At least one person injured
    #[serde(rename = "injury", alias = "moderato")]
    #[strum(to_string = "injury", serialize = "moderato")]
    Injury,
    /// Serious injuries (e.g. "codice rosso")
    #[serde(rename = "serious", alias = "grave")]
    #[strum(to_string = "serious", serialize = "grave")]
    Serious,
    /// At least one death
    #[serde(rename = "fatal", alias = "fatale")]
    #[strum(to_string = "fatal", serialize = "fatale")]
    Fatal,
}

impl Severity {
    /// Returns all variants in ascending order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Informational, Self::Injury, Self::Serious, Self::Fatal]
    }
}

/// Vehicle categories detected in article text.
///
/// Declaration order is the display order used by consumers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum VehicleType {
    /// Cars (auto, vettura, macchina)
    #[serde(rename = "Car")]
    #[strum(serialize = "Car")]
    Car,
    /// Motorcycles and scooters
    #[serde(rename = "Motorcycle")]
    #[strum(serialize = "Motorcycle")]
    Motorcycle,
    /// Bicycles and cyclists
    #[serde(rename = "Bicycle")]
    #[strum(serialize = "Bicycle")]
    Bicycle,
    /// Trucks and other heavy vehicles
    #[serde(rename = "Truck/HeavyVehicle")]
    #[strum(serialize = "Truck/HeavyVehicle")]
    Truck,
    /// Vans
    #[serde(rename = "Van")]
    #[strum(serialize = "Van")]
    Van,
    /// Buses and coaches
    #[serde(rename = "Bus")]
    #[strum(serialize = "Bus")]
    Bus,
}

impl VehicleType {
    /// Returns all variants in vocabulary order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Car,
            Self::Motorcycle,
            Self::Bicycle,
            Self::Truck,
            Self::Van,
            Self::Bus,
        ]
    }
}

/// Estimated number of deaths and injuries reported by a single article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasualtyEstimate {
    /// Reported deaths, at most [`Self::MAX_DEATHS`].
    pub deaths: u32,
    /// Reported injuries, at most [`Self::MAX_INJURIES`].
    pub injuries: u32,
}

impl CasualtyEstimate {
    /// Per-article ceiling on deaths.
    pub const MAX_DEATHS: u32 = 10;
    /// Per-article ceiling on injuries.
    pub const MAX_INJURIES: u32 = 20;

    /// No casualties.
    pub const NONE: Self = Self {
        deaths: 0,
        injuries: 0,
    };

    /// Builds an estimate, capping each figure at its per-article ceiling.
    #[must_use]
    pub fn clamped(deaths: u32, injuries: u32) -> Self {
        Self {
            deaths: deaths.min(Self::MAX_DEATHS),
            injuries: injuries.min(Self::MAX_INJURIES),
        }
    }
}

/// A validated road incident article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Source article identifier.
    pub id: u64,
    /// Publication date.
    pub date: NaiveDate,
    /// Article headline.
    pub title: String,
    /// Canonical URL of the article, if known.
    #[serde(default)]
    pub link: Option<String>,
    /// Short summary shown in listings.
    #[serde(default)]
    pub excerpt: String,
    /// Article body as plain text.
    #[serde(default)]
    pub content: String,
    /// Severity level.
    pub severity: Severity,
    /// Search keywords that matched this article.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Road names mentioned in the article.
    #[serde(default)]
    pub roads: Vec<String>,
    /// City names mentioned in the article.
    #[serde(default)]
    pub cities: Vec<String>,
}

impl Incident {
    /// Calendar year of publication.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month bucket key in `YYYY-MM` form. Keys sort chronologically.
    #[must_use]
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Day of the week of publication.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Title, excerpt and body joined with single spaces, the text every
    /// classifier runs on.
    #[must_use]
    pub fn full_text(&self) -> String {
        format!("{} {} {}", self.title, self.excerpt, self.content)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    fn incident(date: &str) -> Incident {
        Incident {
            id: 1,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            title: "Tamponamento".to_string(),
            link: None,
            excerpt: "sulla provinciale".to_string(),
            content: "nessun ferito".to_string(),
            severity: Severity::Informational,
            keywords: vec![],
            roads: vec![],
            cities: vec![],
        }
    }

    #[test]
    fn severity_parses_italian_and_english_labels() {
        assert_eq!(Severity::from_str("fatale").unwrap(), Severity::Fatal);
        assert_eq!(Severity::from_str("FATAL").unwrap(), Severity::Fatal);
        assert_eq!(Severity::from_str("Moderato").unwrap(), Severity::Injury);
        assert_eq!(Severity::from_str("grave").unwrap(), Severity::Serious);
        assert_eq!(
            Severity::from_str("informativo").unwrap(),
            Severity::Informational
        );
        assert!(Severity::from_str("catastrofico").is_err());
    }

    #[test]
    fn severity_levels_are_ordered() {
        let all = Severity::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Severity::Fatal.to_string(), "fatal");
    }

    #[test]
    fn severity_deserializes_source_labels() {
        let sev: Severity = serde_json::from_str("\"moderato\"").unwrap();
        assert_eq!(sev, Severity::Injury);
        assert_eq!(serde_json::to_string(&sev).unwrap(), "\"injury\"");
    }

    #[test]
    fn vehicle_labels_follow_vocabulary() {
        let labels: Vec<String> = VehicleType::all().iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            ["Car", "Motorcycle", "Bicycle", "Truck/HeavyVehicle", "Van", "Bus"]
        );
    }

    #[test]
    fn casualty_estimate_clamps_to_ceilings() {
        let est = CasualtyEstimate::clamped(42, 99);
        assert_eq!(est.deaths, CasualtyEstimate::MAX_DEATHS);
        assert_eq!(est.injuries, CasualtyEstimate::MAX_INJURIES);
        assert_eq!(CasualtyEstimate::clamped(2, 3).deaths, 2);
    }

    #[test]
    fn derived_date_parts() {
        let inc = incident("2024-03-04");
        assert_eq!(inc.year(), 2024);
        assert_eq!(inc.month_key(), "2024-03");
        assert_eq!(inc.weekday(), Weekday::Mon);
        assert_eq!(inc.full_text(), "Tamponamento sulla provinciale nessun ferito");
    }
}
