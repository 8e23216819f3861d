//! Test helpers for common test setup.

use bevy_ecs::prelude::{Entity, World};

use crate::registry;
use crate::spatial::Point;

/// Create a world with every resource the systems expect: clock, telemetry,
/// pricing, analytics, a fixed 40 km/h speed model and the greedy matcher.
pub fn create_test_world() -> World {
    let mut world = World::new();
    world.insert_resource(crate::clock::SimulationClock::default());
    world.insert_resource(crate::telemetry::SimTelemetry::default());
    world.insert_resource(crate::pricing::PricingConfig::default());
    world.insert_resource(crate::analytics::AnalyticsConfig::default());
    world.insert_resource(crate::speed::SpeedModel::with_range(Some(1), 40.0, 40.0));
    world.insert_resource(crate::scenario::create_greedy_matching());
    world.insert_resource(crate::scenario::MatchRoundConfig::default());
    world.insert_resource(crate::scenario::PendingRequests::default());
    world
}

/// Register an available driver at `(x, y)` with the default rating.
///
/// # Panics
///
/// Panics on non-finite coordinates (test misuse).
pub fn spawn_driver_at(world: &mut World, x: f64, y: f64) -> Entity {
    registry::register_driver(world, Point::new(x, y), crate::ecs::DEFAULT_DRIVER_RATING)
        .expect("test driver position should be valid")
}

/// Register a pending request picking up at `(x, y)` with a dropoff 5 km away.
///
/// # Panics
///
/// Panics on non-finite coordinates (test misuse).
pub fn spawn_request_at(world: &mut World, x: f64, y: f64, requested_at: u64) -> Entity {
    registry::register_request(
        world,
        Point::new(x, y),
        Point::new(x + 3.0, y + 4.0),
        requested_at,
    )
    .expect("test request should be valid")
}
