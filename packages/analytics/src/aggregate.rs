//! Single-pass corpus aggregation.

use std::collections::BTreeMap;

use chrono::Weekday;
use road_watch_analytics_models::{
    Analytics, CasualtyTotals, DateRange, EntityStat, MonthCount, SeverityCounts, VehicleCount,
    WeekdayCount, YearCasualties, YearCount,
};
use road_watch_classifier::{classify_vehicles, extract_casualties};
use road_watch_incident_models::{Incident, Severity, VehicleType};

use crate::AnalyticsConfig;
use crate::ranking::{Counter, rank};

/// Number of most recent months kept in the monthly trend.
pub const MONTHLY_TREND_WINDOW: usize = 36;

/// Aggregates with the limits from `config`.
#[must_use]
pub fn aggregate_with_config(incidents: &[Incident], config: &AnalyticsConfig) -> Analytics {
    aggregate(incidents, config.road_limit, config.city_limit)
}

/// Computes the analytics snapshot for `incidents`.
///
/// Every article is classified once. Roads and cities are ranked by mention
/// count and capped at `road_limit` and `city_limit`; vehicles are ranked
/// without a cap. The result depends only on the input order and contents.
#[must_use]
pub fn aggregate(incidents: &[Incident], road_limit: usize, city_limit: usize) -> Analytics {
    let mut severity = SeverityCounts::default();
    let mut period: Option<DateRange> = None;
    let mut months: BTreeMap<String, u64> = BTreeMap::new();
    let mut years: BTreeMap<i32, u64> = BTreeMap::new();
    let mut weekdays = [0_u64; 7];
    let mut vehicles: Counter<VehicleType, u64> = Counter::new();
    let mut casualties = CasualtyTotals::default();
    let mut casualties_by_year: BTreeMap<i32, CasualtyTotals> = BTreeMap::new();
    let mut roads: Counter<String, EntityStat> = Counter::new();
    let mut cities: Counter<String, EntityStat> = Counter::new();

    for incident in incidents {
        severity.record(incident.severity);
        period = Some(DateRange::including(period, incident.date));

        *months.entry(incident.month_key()).or_default() += 1;
        *years.entry(incident.year()).or_default() += 1;
        weekdays[incident.weekday().num_days_from_monday() as usize] += 1;

        let text = incident.full_text();
        for vehicle in classify_vehicles(&text) {
            vehicles.increment(vehicle);
        }

        let estimate = extract_casualties(&text);
        casualties.add(estimate);
        casualties_by_year
            .entry(incident.year())
            .or_default()
            .add(estimate);

        record_entities(&mut roads, &incident.roads, incident.severity);
        record_entities(&mut cities, &incident.cities, incident.severity);
    }

    let monthly_trend: Vec<MonthCount> = {
        let skip = months.len().saturating_sub(MONTHLY_TREND_WINDOW);
        months
            .into_iter()
            .skip(skip)
            .map(|(month, count)| MonthCount { month, count })
            .collect()
    };

    log::debug!(
        "Aggregated {} incidents: {} roads, {} cities, {} vehicle types",
        incidents.len(),
        roads.len(),
        cities.len(),
        vehicles.len()
    );

    Analytics {
        total_incidents: incidents.len() as u64,
        period,
        severity,
        monthly_trend,
        yearly_trend: years
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect(),
        weekdays: weekday_distribution(&weekdays),
        top_roads: ranked_stats(roads, road_limit),
        top_cities: ranked_stats(cities, city_limit),
        vehicles: rank(vehicles, None)
            .into_iter()
            .map(|(vehicle, count)| VehicleCount { vehicle, count })
            .collect(),
        casualties,
        casualties_by_year: casualties_by_year
            .into_iter()
            .map(|(year, totals)| YearCasualties {
                year,
                deaths: totals.deaths,
                injuries: totals.injuries,
            })
            .collect(),
    }
}

fn record_entities(counter: &mut Counter<String, EntityStat>, names: &[String], severity: Severity) {
    for name in names {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        counter
            .entry_or_insert_with(name.to_string(), || EntityStat::new(name))
            .record(severity);
    }
}

fn ranked_stats(counter: Counter<String, EntityStat>, limit: usize) -> Vec<EntityStat> {
    rank(counter, Some(limit))
        .into_iter()
        .map(|(_, stat)| stat)
        .collect()
}

fn weekday_distribution(counts: &[u64; 7]) -> Vec<WeekdayCount> {
    let mut day = Weekday::Mon;
    let mut out = Vec::new();
    for &count in counts {
        if count > 0 {
            out.push(WeekdayCount { weekday: day, count });
        }
        day = day.succ();
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn incident(id: u64, date: &str, severity: Severity, title: &str) -> Incident {
        Incident {
            id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            title: title.to_string(),
            link: None,
            excerpt: String::new(),
            content: String::new(),
            severity,
            keywords: vec![],
            roads: vec![],
            cities: vec![],
        }
    }

    #[test]
    fn empty_corpus_yields_empty_analytics() {
        let analytics = aggregate(&[], 20, 20);
        assert_eq!(analytics, Analytics::default());
        assert_eq!(analytics.severity.total(), 0);
        assert!(analytics.period.is_none());
    }

    #[test]
    fn counts_severity_dates_and_casualties() {
        let incidents = vec![
            incident(
                1,
                "2023-06-05",
                Severity::Fatal,
                "Un morto nell'incidente sulla provinciale, due feriti trasportati in ospedale",
            ),
            incident(2, "2023-06-06", Severity::Injury, "Scontro tra moto e auto, 2 feriti"),
            incident(3, "2024-01-07", Severity::Informational, "Traffico rallentato"),
        ];
        let analytics = aggregate(&incidents, 20, 20);

        assert_eq!(analytics.total_incidents, 3);
        assert_eq!(analytics.severity.fatal, 1);
        assert_eq!(analytics.severity.injury, 1);
        assert_eq!(analytics.severity.informational, 1);
        assert_eq!(
            analytics.yearly_trend,
            vec![
                YearCount { year: 2023, count: 2 },
                YearCount { year: 2024, count: 1 },
            ]
        );
        assert_eq!(analytics.monthly_trend[0].month, "2023-06");
        assert_eq!(analytics.monthly_trend[0].count, 2);

        assert_eq!(analytics.casualties.deaths, 1);
        assert_eq!(analytics.casualties.injuries, 3);
        assert_eq!(analytics.casualties_by_year.len(), 2);
        assert_eq!(analytics.casualties_by_year[1].deaths, 0);

        let period = analytics.period.unwrap();
        assert_eq!(period.min, NaiveDate::from_ymd_opt(2023, 6, 5).unwrap());
        assert_eq!(period.max, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
    }

    #[test]
    fn weekdays_run_monday_to_sunday_without_zeros() {
        // 2024-03-10 is a Sunday, 2024-03-04 a Monday, 2024-03-06 a Wednesday.
        let incidents = vec![
            incident(1, "2024-03-10", Severity::Informational, ""),
            incident(2, "2024-03-04", Severity::Informational, ""),
            incident(3, "2024-03-06", Severity::Informational, ""),
            incident(4, "2024-03-11", Severity::Informational, ""),
        ];
        let analytics = aggregate(&incidents, 20, 20);
        let days: Vec<(Weekday, u64)> = analytics
            .weekdays
            .iter()
            .map(|w| (w.weekday, w.count))
            .collect();
        assert_eq!(
            days,
            vec![(Weekday::Mon, 2), (Weekday::Wed, 1), (Weekday::Sun, 1)]
        );
    }

    #[test]
    fn road_ranking_caps_and_keeps_first_appearance_order() {
        let incidents: Vec<Incident> = (0..40)
            .map(|i| {
                let mut inc = incident(i, "2024-01-01", Severity::Injury, "");
                inc.roads = vec![format!("SP {i}")];
                inc
            })
            .collect();
        let analytics = aggregate(&incidents, 15, 20);
        assert_eq!(analytics.top_roads.len(), 15);
        for (i, stat) in analytics.top_roads.iter().enumerate() {
            assert_eq!(stat.name, format!("SP {i}"));
            assert_eq!(stat.total, 1);
            assert_eq!(stat.by_severity.injury, 1);
        }
    }

    #[test]
    fn most_mentioned_road_ranks_first_with_breakdown() {
        let mut a = incident(1, "2024-01-01", Severity::Injury, "");
        a.roads = vec!["SS 16".to_string(), "A14".to_string()];
        let mut b = incident(2, "2024-01-02", Severity::Fatal, "");
        b.roads = vec![" A14 ".to_string(), "  ".to_string()];
        let analytics = aggregate(&[a, b], 20, 20);

        assert_eq!(analytics.top_roads.len(), 2);
        let top = &analytics.top_roads[0];
        assert_eq!(top.name, "A14");
        assert_eq!(top.total, 2);
        assert_eq!(top.by_severity.fatal, 1);
        assert_eq!(top.by_severity.injury, 1);
        assert_eq!(top.by_severity.total(), top.total);
        assert_eq!(analytics.top_roads[1].name, "SS 16");
    }

    #[test]
    fn city_limit_is_independent() {
        let mut a = incident(1, "2024-01-01", Severity::Serious, "");
        a.cities = vec!["Bari".to_string(), "Lecce".to_string(), "Taranto".to_string()];
        let analytics = aggregate(&[a], 20, 2);
        assert_eq!(analytics.top_cities.len(), 2);
        assert_eq!(analytics.top_cities[0].name, "Bari");
        assert_eq!(analytics.top_cities[0].by_severity.serious, 1);
    }

    #[test]
    fn monthly_trend_keeps_latest_window() {
        let incidents: Vec<Incident> = (0..48_u32)
            .map(|i| {
                let date = NaiveDate::from_ymd_opt(2020 + (i / 12) as i32, i % 12 + 1, 15).unwrap();
                incident(u64::from(i), &date.to_string(), Severity::Informational, "")
            })
            .collect();
        let analytics = aggregate(&incidents, 20, 20);
        assert_eq!(analytics.monthly_trend.len(), MONTHLY_TREND_WINDOW);
        assert_eq!(analytics.monthly_trend[0].month, "2021-01");
        assert_eq!(analytics.monthly_trend[35].month, "2023-12");
        assert!(
            analytics
                .monthly_trend
                .windows(2)
                .all(|w| w[0].month < w[1].month)
        );
        assert_eq!(analytics.yearly_trend.len(), 4);
    }

    #[test]
    fn vehicles_ranked_by_incident_count() {
        let incidents = vec![
            incident(1, "2024-01-01", Severity::Injury, "Scontro tra moto e auto"),
            incident(2, "2024-01-02", Severity::Injury, "Auto fuori strada"),
            incident(3, "2024-01-03", Severity::Injury, "Ciclista investito da un'auto"),
        ];
        let analytics = aggregate(&incidents, 20, 20);
        assert_eq!(analytics.vehicles[0].vehicle, VehicleType::Car);
        assert_eq!(analytics.vehicles[0].count, 3);
        assert_eq!(
            analytics.vehicles[1..]
                .iter()
                .map(|v| v.vehicle)
                .collect::<Vec<_>>(),
            vec![VehicleType::Motorcycle, VehicleType::Bicycle]
        );
    }

    #[test]
    fn aggregation_is_idempotent() {
        let mut a = incident(1, "2024-05-01", Severity::Fatal, "2 morti nello scontro");
        a.roads = vec!["A1".to_string()];
        a.cities = vec!["Roma".to_string()];
        let incidents = vec![a, incident(2, "2024-05-02", Severity::Injury, "un ferito")];
        let config = AnalyticsConfig::default();
        assert_eq!(
            aggregate_with_config(&incidents, &config),
            aggregate_with_config(&incidents, &config)
        );
    }
}
