//! Run a 100-request / 20-driver scenario and print the final report.
//!
//! Run with: cargo run -p ride_core --example scenario_run

use bevy_ecs::prelude::World;
use ride_core::analytics::{build_report, rank_trips, RankKey};
use ride_core::runner::{run_until_empty, simulation_schedule};
use ride_core::scenario::{build_scenario, ScenarioParams};
use ride_core::telemetry::SimTelemetry;

fn main() {
    const NUM_REQUESTS: usize = 100;
    const NUM_DRIVERS: usize = 20;

    let params = ScenarioParams {
        num_drivers: NUM_DRIVERS,
        num_requests: NUM_REQUESTS,
        ..Default::default()
    }
    .with_seed(123);
    let analytics = params.analytics;

    let mut world = World::new();
    build_scenario(&mut world, params);

    let mut schedule = simulation_schedule();
    let max_steps = 1_000_000;
    let steps = run_until_empty(&mut world, &mut schedule, max_steps);

    let clock = world.resource::<ride_core::clock::SimulationClock>();
    let sim_time_secs = clock.now() / 1000;
    println!(
        "--- Scenario run ({} requests, {} drivers, seed 123) ---",
        NUM_REQUESTS, NUM_DRIVERS
    );
    println!("Steps executed: {}", steps);
    println!(
        "Simulation time: {} s ({:.1} min)",
        sim_time_secs,
        sim_time_secs as f64 / 60.0
    );

    let telemetry = world.resource::<SimTelemetry>();
    let report = build_report(&telemetry.completed_trips, &analytics);
    println!("Completed trips: {}", report.trip_count);
    println!("Average wait: {:.1} s", report.average_wait_ms / 1000.0);
    println!(
        "Average trip duration: {:.1} min",
        report.average_duration_ms / 60_000.0
    );
    println!("Total fares: {:.2}", report.total_fare);
    println!("Satisfaction index: {:.1} / 100", report.satisfaction_index);

    println!("\nTop 5 trips by fare:");
    for record in rank_trips(&telemetry.completed_trips, RankKey::Fare).iter().take(5) {
        println!(
            "  driver={:?}  distance={:.2} km  fare={:.2}  wait={} s",
            record.driver_entity,
            record.distance_km,
            record.fare,
            record.wait_time() / 1000,
        );
    }
}
