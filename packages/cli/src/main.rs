#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the road-watch toolchain.
//!
//! * `analyze` aggregates a corpus file and prints the analytics JSON.
//! * `classify` runs the text heuristics on a single article.
//! * `clean` screens a raw corpus and writes kept and removed records.
//!
//! Logging goes to stderr through `pretty_env_logger` (`RUST_LOG=debug`).

use std::collections::BTreeSet;
use std::io::Read as _;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use road_watch_analytics::{AnalyticsConfig, aggregate_with_config};
use road_watch_classifier::{
    ArticleFeatures, DEFAULT_KEYWORDS, ScreenVerdict, classify_vehicles, enrich_article,
    extract_casualties, is_accident_context, screen_article,
};
use road_watch_corpus::{clean_records, load_incidents, read_records, write_clean_outcome};
use road_watch_incident_models::{CasualtyEstimate, VehicleType};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "road_watch", about = "Road incident news analytics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a corpus file into dashboard analytics
    Analyze {
        /// Corpus JSON file (array of articles)
        input: PathBuf,
        /// TOML file with `road_limit` / `city_limit`
        #[arg(long)]
        config: Option<PathBuf>,
        /// Number of ranked roads (overrides the config file)
        #[arg(long)]
        road_limit: Option<usize>,
        /// Number of ranked cities (overrides the config file)
        #[arg(long)]
        city_limit: Option<usize>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Classify one article's text (reads stdin when TEXT is omitted)
    Classify {
        /// Article text
        text: Option<String>,
    },
    /// Remove articles that are not road accident reports
    Clean {
        /// Raw corpus JSON file
        input: PathBuf,
        /// Where to write kept records (defaults to overwriting INPUT)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the report without writing any file
        #[arg(long)]
        dry_run: bool,
    },
}

/// Heuristic readout for a single article.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Classification {
    vehicles: BTreeSet<VehicleType>,
    casualties: CasualtyEstimate,
    accident_context: bool,
    relevance: ScreenVerdict,
    #[serde(flatten)]
    features: ArticleFeatures,
}

fn classify_text(text: &str) -> Classification {
    Classification {
        vehicles: classify_vehicles(text),
        casualties: extract_casualties(text),
        accident_context: is_accident_context(text),
        relevance: screen_article(text),
        features: enrich_article(text, DEFAULT_KEYWORDS),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), serde_json::Error> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            config,
            road_limit,
            city_limit,
            pretty,
        } => {
            let config = match config {
                Some(path) => AnalyticsConfig::load(&path)?,
                None => AnalyticsConfig::default(),
            }
            .with_overrides(road_limit, city_limit);

            let start = Instant::now();
            let load = load_incidents(&input)?;
            for error in &load.errors {
                log::warn!("Skipping invalid {error}");
            }

            let analytics = aggregate_with_config(&load.incidents, &config);
            log::info!(
                "Aggregated {} incidents in {:.2}s",
                analytics.total_incidents,
                start.elapsed().as_secs_f64()
            );
            print_json(&analytics, pretty)?;
        }
        Commands::Classify { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            print_json(&classify_text(&text), true)?;
        }
        Commands::Clean {
            input,
            output,
            dry_run,
        } => {
            let outcome = clean_records(read_records(&input)?);
            if dry_run {
                log::info!("Dry run, no files written");
            } else {
                let output = output.unwrap_or_else(|| input.clone());
                write_clean_outcome(&outcome, &output)?;
            }
            print_json(&outcome.report, true)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use road_watch_incident_models::Severity;

    use super::*;

    #[test]
    fn parses_analyze_flags() {
        let cli = Cli::try_parse_from([
            "road_watch",
            "analyze",
            "data/incidents.json",
            "--road-limit",
            "15",
            "--pretty",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze {
                input,
                config,
                road_limit,
                city_limit,
                pretty,
            } => {
                assert_eq!(input, PathBuf::from("data/incidents.json"));
                assert!(config.is_none());
                assert_eq!(road_limit, Some(15));
                assert_eq!(city_limit, None);
                assert!(pretty);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn parses_clean_dry_run() {
        let cli = Cli::try_parse_from(["road_watch", "clean", "in.json", "--dry-run"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Clean {
                dry_run: true,
                output: None,
                ..
            }
        ));
    }

    #[test]
    fn classify_reports_every_heuristic() {
        let result = classify_text("Scontro tra moto e auto, 2 feriti");
        assert_eq!(
            result.vehicles.into_iter().collect::<Vec<_>>(),
            vec![VehicleType::Car, VehicleType::Motorcycle]
        );
        assert_eq!(result.casualties, CasualtyEstimate { deaths: 0, injuries: 2 });
        assert!(result.accident_context);
        assert!(result.relevance.is_kept());
        assert_eq!(result.features.severity, Severity::Injury);
        assert_eq!(result.features.keywords, vec!["scontro", "feriti"]);
    }
}
