//! Memoized analytics keyed on corpus identity.
//!
//! The dashboard recomputes analytics only when the incident collection
//! itself is replaced. [`AnalyticsSnapshot`] keeps the last collection
//! handle and compares handles with [`Arc::ptr_eq`], so an unchanged corpus
//! is never re-aggregated and a swapped one always is.

use std::sync::Arc;

use road_watch_analytics_models::Analytics;
use road_watch_incident_models::Incident;

use crate::{AnalyticsConfig, aggregate_with_config};

/// Last computed analytics together with the corpus it was computed from.
#[derive(Debug, Default)]
pub struct AnalyticsSnapshot {
    config: AnalyticsConfig,
    cached: Option<(Arc<[Incident]>, Arc<Analytics>)>,
}

impl AnalyticsSnapshot {
    /// Creates an empty snapshot that aggregates with `config`.
    #[must_use]
    pub const fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            cached: None,
        }
    }

    /// Returns analytics for `incidents`, recomputing only if `incidents`
    /// is a different collection than the one last seen.
    pub fn get(&mut self, incidents: &Arc<[Incident]>) -> Arc<Analytics> {
        if let Some((_, analytics)) = self
            .cached
            .as_ref()
            .filter(|(corpus, _)| Arc::ptr_eq(corpus, incidents))
        {
            return Arc::clone(analytics);
        }

        log::debug!("Corpus changed, recomputing analytics for {} incidents", incidents.len());
        let analytics = Arc::new(aggregate_with_config(incidents, &self.config));
        self.cached = Some((Arc::clone(incidents), Arc::clone(&analytics)));
        analytics
    }

    /// Drops the cached result.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
