#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident aggregation for the road-watch dashboard.
//!
//! [`aggregate`] walks an incident corpus once, running the vehicle and
//! casualty classifiers on every article, and produces a sorted
//! [`Analytics`](road_watch_analytics_models::Analytics) snapshot. Rankings
//! are built on the insertion-ordered [`ranking::Counter`], so ties always
//! resolve to the entity seen first.

pub mod aggregate;
pub mod config;
pub mod ranking;
pub mod snapshot;

pub use aggregate::{MONTHLY_TREND_WINDOW, aggregate, aggregate_with_config};
pub use config::AnalyticsConfig;
pub use snapshot::AnalyticsSnapshot;

use thiserror::Error;

/// Errors that can occur while configuring analytics.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Reading the configuration file failed.
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// Path that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration document is not valid TOML for [`AnalyticsConfig`].
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
