#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Analytics snapshot types.
//!
//! An [`Analytics`] value is produced by one aggregation pass over an
//! incident corpus and is plain data: every trend and ranking is already
//! sorted, so consumers never need to re-sort.

use chrono::{NaiveDate, Weekday};
use road_watch_incident_models::{CasualtyEstimate, Severity, VehicleType};
use serde::{Deserialize, Serialize};

/// Number of incidents at each severity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityCounts {
    /// Informational incidents.
    pub informational: u64,
    /// Incidents with injuries.
    pub injury: u64,
    /// Serious incidents.
    pub serious: u64,
    /// Fatal incidents.
    pub fatal: u64,
}

impl SeverityCounts {
    /// Counts one more incident at `severity`.
    pub const fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Informational => self.informational += 1,
            Severity::Injury => self.injury += 1,
            Severity::Serious => self.serious += 1,
            Severity::Fatal => self.fatal += 1,
        }
    }

    /// Count for a single level.
    #[must_use]
    pub const fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Informational => self.informational,
            Severity::Injury => self.injury,
            Severity::Serious => self.serious,
            Severity::Fatal => self.fatal,
        }
    }

    /// Sum over all levels.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.informational + self.injury + self.serious + self.fatal
    }
}

/// Mention statistics for a road or a city.
///
/// `by_severity.total()` always equals `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityStat {
    /// Road or city name, trimmed.
    pub name: String,
    /// Number of incidents mentioning this entity.
    pub total: u64,
    /// Breakdown of `total` by incident severity.
    pub by_severity: SeverityCounts,
}

impl EntityStat {
    /// Creates an entity with no mentions yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total: 0,
            by_severity: SeverityCounts::default(),
        }
    }

    /// Counts one more mention by an incident of `severity`.
    pub const fn record(&mut self, severity: Severity) {
        self.total += 1;
        self.by_severity.record(severity);
    }
}

/// Incident count for one `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCount {
    /// Month key (`YYYY-MM`).
    pub month: String,
    /// Incidents published that month.
    pub count: u64,
}

/// Incident count for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearCount {
    /// Calendar year.
    pub year: i32,
    /// Incidents published that year.
    pub count: u64,
}

/// Incident count for one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayCount {
    /// Day of the week.
    pub weekday: Weekday,
    /// Incidents published on that day.
    pub count: u64,
}

/// Number of incidents mentioning a vehicle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCount {
    /// Vehicle type.
    pub vehicle: VehicleType,
    /// Incidents whose text mentions it.
    pub count: u64,
}

/// Summed casualty estimates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasualtyTotals {
    /// Estimated deaths.
    pub deaths: u64,
    /// Estimated injuries.
    pub injuries: u64,
}

impl CasualtyTotals {
    /// Adds one article's estimate.
    pub fn add(&mut self, estimate: CasualtyEstimate) {
        self.deaths += u64::from(estimate.deaths);
        self.injuries += u64::from(estimate.injuries);
    }
}

/// Casualty totals for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearCasualties {
    /// Calendar year.
    pub year: i32,
    /// Estimated deaths that year.
    pub deaths: u64,
    /// Estimated injuries that year.
    pub injuries: u64,
}

/// Earliest and latest publication dates in a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// Earliest publication date.
    pub min: NaiveDate,
    /// Latest publication date.
    pub max: NaiveDate,
}

impl DateRange {
    /// Widens the range to include `date`.
    #[must_use]
    pub fn including(range: Option<Self>, date: NaiveDate) -> Self {
        match range {
            None => Self {
                min: date,
                max: date,
            },
            Some(r) => Self {
                min: r.min.min(date),
                max: r.max.max(date),
            },
        }
    }
}

/// Aggregate statistics over an incident corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    /// Number of incidents aggregated.
    pub total_incidents: u64,
    /// Publication date range, `None` for an empty corpus.
    pub period: Option<DateRange>,
    /// Incidents per severity level.
    pub severity: SeverityCounts,
    /// Most recent months present in the data, oldest first.
    pub monthly_trend: Vec<MonthCount>,
    /// Every year present in the data, oldest first.
    pub yearly_trend: Vec<YearCount>,
    /// Monday to Sunday, days without incidents omitted.
    pub weekdays: Vec<WeekdayCount>,
    /// Most mentioned roads, descending.
    pub top_roads: Vec<EntityStat>,
    /// Most mentioned cities, descending.
    pub top_cities: Vec<EntityStat>,
    /// Vehicle types by number of incidents, descending.
    pub vehicles: Vec<VehicleCount>,
    /// Casualty estimates summed over the corpus.
    pub casualties: CasualtyTotals,
    /// Casualty estimates per year, oldest first.
    pub casualties_by_year: Vec<YearCasualties>,
}
