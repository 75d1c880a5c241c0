#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Text heuristics for road incident articles.
//!
//! Everything here is a pure function over article text backed by
//! process-wide compiled regex tables:
//!
//! * [`vehicles::classify_vehicles`] detects which vehicle types appear.
//! * [`casualties::extract_casualties`] estimates deaths and injuries,
//!   suppressing non-traffic contexts.
//! * [`relevance::screen_article`] decides whether an article is about a
//!   road accident at all.
//! * [`enrich::enrich_article`] guesses severity, finds road and city
//!   mentions and flags search keywords.

pub mod casualties;
pub mod enrich;
pub mod normalize;
pub mod relevance;
pub mod vehicles;

pub use casualties::{extract_casualties, is_accident_context};
pub use enrich::{
    ArticleFeatures, DEFAULT_KEYWORDS, Locations, detect_locations, enrich_article,
    flag_keywords, guess_severity,
};
pub use relevance::{RejectReason, ScreenVerdict, screen_article};
pub use vehicles::classify_vehicles;
