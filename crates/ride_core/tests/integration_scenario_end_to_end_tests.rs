use bevy_ecs::prelude::World;

use ride_core::analytics::{build_report, AnalyticsConfig};
use ride_core::clock::ONE_SEC_MS;
use ride_core::ecs::{Driver, DriverState};
use ride_core::runner::{run_until_empty, simulation_schedule};
use ride_core::scenario::{build_scenario, ScenarioParams};
use ride_core::telemetry::{CompletedTripRecord, SimTelemetry};

fn small_params(seed: u64) -> ScenarioParams {
    ScenarioParams {
        num_drivers: 5,
        num_requests: 20,
        ..Default::default()
    }
    .with_seed(seed)
    .with_request_window_ms(30 * 60 * ONE_SEC_MS)
    .with_speed_range(40.0, 40.0)
}

fn run_scenario(seed: u64) -> Vec<CompletedTripRecord> {
    let mut world = World::new();
    build_scenario(&mut world, small_params(seed));
    let mut schedule = simulation_schedule();
    let steps = run_until_empty(&mut world, &mut schedule, 100_000);
    assert!(steps < 100_000, "runner did not converge");

    let drivers: Vec<&Driver> = world.query::<&Driver>().iter(&world).collect();
    assert!(drivers
        .iter()
        .all(|driver| driver.state == DriverState::Available));

    world.resource::<SimTelemetry>().completed_trips.clone()
}

#[test]
fn every_request_eventually_completes() {
    let trips = run_scenario(42);
    assert_eq!(trips.len(), 20);
    for record in &trips {
        assert!(record.requested_at <= record.matched_at);
        assert!(record.matched_at <= record.pickup_at);
        assert!(record.pickup_at <= record.completed_at);
        assert!(record.distance_km >= 0.0);
        assert!(record.fare > 0.0);
    }
}

#[test]
fn identical_seeds_give_identical_runs() {
    let first = run_scenario(7);
    let second = run_scenario(7);
    assert_eq!(first, second);
}

#[test]
fn different_seeds_give_different_runs() {
    let first = run_scenario(7);
    let second = run_scenario(8);
    assert_ne!(first, second);
}

#[test]
fn report_over_a_full_run_is_well_formed() {
    let trips = run_scenario(42);
    let report = build_report(&trips, &AnalyticsConfig::default());
    assert_eq!(report.trip_count, 20);
    assert!(report.average_wait_ms >= 0.0);
    assert!(report.average_duration_ms > 0.0);
    assert!(report.total_fare > 0.0);
    assert!((0.0..=100.0).contains(&report.satisfaction_index));
}
