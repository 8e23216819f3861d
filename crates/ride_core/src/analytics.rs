//! Analytics: aggregate reports over completed trips.
//!
//! Reports are recomputed on demand from [CompletedTripRecord]s and never
//! persisted. `build_report` is pure and total: an empty input yields a
//! zero-valued report rather than a division error.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::clock::ONE_SEC_MS;
use crate::telemetry::CompletedTripRecord;

/// Thresholds and weight for the satisfaction index, passed in at scenario
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Resource, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Wait beyond this (ms) starts penalizing satisfaction.
    pub wait_threshold_ms: u64,
    /// Trip duration beyond this (ms) starts penalizing satisfaction.
    pub duration_threshold_ms: u64,
    /// Penalty per unit of threshold excess, in satisfaction points.
    pub penalty_weight: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            wait_threshold_ms: 5 * 60 * ONE_SEC_MS,
            duration_threshold_ms: 30 * 60 * ONE_SEC_MS,
            penalty_weight: 25.0,
        }
    }
}

/// Read-only snapshot of aggregate statistics over a set of completed trips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub trip_count: usize,
    pub average_wait_ms: f64,
    pub average_duration_ms: f64,
    pub total_fare: f64,
    /// Bounded score in [0, 100]; 100 when every trip stayed within the
    /// configured thresholds.
    pub satisfaction_index: f64,
}

impl Report {
    pub fn empty() -> Self {
        Self {
            trip_count: 0,
            average_wait_ms: 0.0,
            average_duration_ms: 0.0,
            total_fare: 0.0,
            satisfaction_index: 100.0,
        }
    }
}

/// Per-trip satisfaction score.
///
/// `100 - penalty_weight * (excess_wait_ratio + excess_duration_ratio)`,
/// clamped to [0, 100], where each excess ratio is the fraction by which the
/// trip overshot its threshold. Monotonically decreasing in wait and
/// duration, bounded by construction. Also feeds the per-trip driver rating
/// at completion (mapped onto a 1-5 star scale).
pub fn trip_score(config: &AnalyticsConfig, wait_ms: u64, duration_ms: u64) -> f64 {
    let excess_ratio = |value: u64, threshold: u64| {
        if threshold == 0 {
            return 0.0;
        }
        value.saturating_sub(threshold) as f64 / threshold as f64
    };
    let penalty = config.penalty_weight
        * (excess_ratio(wait_ms, config.wait_threshold_ms)
            + excess_ratio(duration_ms, config.duration_threshold_ms));
    (100.0 - penalty).clamp(0.0, 100.0)
}

/// Build an aggregate [Report] over completed trips.
///
/// Empty input yields count 0, zero averages and a satisfaction index of 100
/// (no passenger experienced a delay).
pub fn build_report(trips: &[CompletedTripRecord], config: &AnalyticsConfig) -> Report {
    if trips.is_empty() {
        return Report::empty();
    }

    let count = trips.len() as f64;
    let total_wait: u64 = trips.iter().map(|t| t.wait_time()).sum();
    let total_duration: u64 = trips.iter().map(|t| t.trip_duration()).sum();
    let total_fare: f64 = trips.iter().map(|t| t.fare).sum();
    let total_score: f64 = trips
        .iter()
        .map(|t| trip_score(config, t.wait_time(), t.trip_duration()))
        .sum();

    Report {
        trip_count: trips.len(),
        average_wait_ms: total_wait as f64 / count,
        average_duration_ms: total_duration as f64 / count,
        total_fare,
        satisfaction_index: total_score / count,
    }
}

/// Sort key for [rank_trips].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    Fare,
    Distance,
}

/// Completed trips ranked best-first (highest fare or longest distance).
/// Stable: equal keys keep their recorded order.
pub fn rank_trips<'a>(
    trips: &'a [CompletedTripRecord],
    key: RankKey,
) -> Vec<&'a CompletedTripRecord> {
    let mut ranked: Vec<&CompletedTripRecord> = trips.iter().collect();
    ranked.sort_by(|a, b| {
        let (a, b) = match key {
            RankKey::Fare => (a.fare, b.fare),
            RankKey::Distance => (a.distance_km, b.distance_km),
        };
        b.partial_cmp(&a).unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::Entity;

    fn record(wait_ms: u64, duration_ms: u64, distance_km: f64, fare: f64) -> CompletedTripRecord {
        CompletedTripRecord {
            trip_entity: Entity::from_raw(0),
            request_entity: Entity::from_raw(1),
            driver_entity: Entity::from_raw(2),
            requested_at: 0,
            matched_at: wait_ms,
            pickup_at: wait_ms,
            completed_at: wait_ms + duration_ms,
            distance_km,
            fare,
        }
    }

    #[test]
    fn empty_input_yields_zero_valued_report() {
        let report = build_report(&[], &AnalyticsConfig::default());
        assert_eq!(report.trip_count, 0);
        assert_eq!(report.average_wait_ms, 0.0);
        assert_eq!(report.average_duration_ms, 0.0);
        assert_eq!(report.total_fare, 0.0);
        assert_eq!(report.satisfaction_index, 100.0);
    }

    #[test]
    fn averages_are_means_over_all_trips() {
        let config = AnalyticsConfig::default();
        let trips = vec![
            record(60_000, 600_000, 5.0, 10.0),
            record(120_000, 1_200_000, 10.0, 20.0),
        ];
        let report = build_report(&trips, &config);
        assert_eq!(report.trip_count, 2);
        assert_eq!(report.average_wait_ms, 90_000.0);
        assert_eq!(report.average_duration_ms, 900_000.0);
        assert_eq!(report.total_fare, 30.0);
    }

    #[test]
    fn trips_within_thresholds_score_full_satisfaction() {
        let config = AnalyticsConfig::default();
        let trips = vec![record(60_000, 600_000, 5.0, 10.0)];
        let report = build_report(&trips, &config);
        assert_eq!(report.satisfaction_index, 100.0);
    }

    #[test]
    fn satisfaction_decreases_monotonically_with_wait() {
        let config = AnalyticsConfig::default();
        let mut previous = f64::INFINITY;
        for minutes in [1u64, 5, 10, 20, 60, 240] {
            let trips = vec![record(minutes * 60_000, 600_000, 5.0, 10.0)];
            let index = build_report(&trips, &config).satisfaction_index;
            assert!(index <= previous, "index must not increase with wait");
            assert!((0.0..=100.0).contains(&index), "index must stay bounded");
            previous = index;
        }
    }

    #[test]
    fn satisfaction_decreases_monotonically_with_duration() {
        let config = AnalyticsConfig::default();
        let mut previous = f64::INFINITY;
        for minutes in [10u64, 30, 45, 90, 600] {
            let trips = vec![record(60_000, minutes * 60_000, 5.0, 10.0)];
            let index = build_report(&trips, &config).satisfaction_index;
            assert!(index <= previous, "index must not increase with duration");
            assert!((0.0..=100.0).contains(&index), "index must stay bounded");
            previous = index;
        }
    }

    #[test]
    fn build_report_does_not_mutate_its_input() {
        let config = AnalyticsConfig::default();
        let trips = vec![record(60_000, 600_000, 5.0, 10.0)];
        let before = trips.clone();
        let _ = build_report(&trips, &config);
        assert_eq!(trips, before);
    }

    #[test]
    fn ranking_orders_by_fare_or_distance_descending() {
        let trips = vec![
            record(0, 0, 2.0, 5.0),
            record(0, 0, 8.0, 15.0),
            record(0, 0, 4.0, 9.0),
        ];
        let by_fare = rank_trips(&trips, RankKey::Fare);
        assert_eq!(
            by_fare.iter().map(|t| t.fare).collect::<Vec<_>>(),
            vec![15.0, 9.0, 5.0]
        );
        let by_distance = rank_trips(&trips, RankKey::Distance);
        assert_eq!(
            by_distance
                .iter()
                .map(|t| t.distance_km)
                .collect::<Vec<_>>(),
            vec![8.0, 4.0, 2.0]
        );
    }
}
