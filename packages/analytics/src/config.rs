//! Aggregation settings loaded from TOML.
//!
//! ```toml
//! road_limit = 20
//! city_limit = 10
//! ```
//!
//! Missing keys fall back to [`AnalyticsConfig::default`].

use std::path::Path;

use serde::Deserialize;

use crate::AnalyticsError;

/// Default number of ranked roads and cities.
pub const DEFAULT_RANK_LIMIT: usize = 20;

/// Ranking limits applied by [`crate::aggregate_with_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyticsConfig {
    /// Maximum number of roads in `topRoads`.
    pub road_limit: usize,
    /// Maximum number of cities in `topCities`.
    pub city_limit: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            road_limit: DEFAULT_RANK_LIMIT,
            city_limit: DEFAULT_RANK_LIMIT,
        }
    }
}

impl AnalyticsConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Config`] if the document is malformed or
    /// carries unknown keys.
    pub fn from_toml_str(s: &str) -> Result<Self, AnalyticsError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Io`] if the file cannot be read, or
    /// [`AnalyticsError::Config`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, AnalyticsError> {
        let text = std::fs::read_to_string(path).map_err(|source| AnalyticsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded analytics config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Returns a copy with the given limits overriding the configured ones.
    #[must_use]
    pub fn with_overrides(self, road_limit: Option<usize>, city_limit: Option<usize>) -> Self {
        Self {
            road_limit: road_limit.unwrap_or(self.road_limit),
            city_limit: city_limit.unwrap_or(self.city_limit),
        }
    }
}
