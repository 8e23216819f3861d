use std::collections::VecDeque;

use bevy_ecs::prelude::{Resource, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::{EventKind, SimulationClock};
use crate::ecs::DEFAULT_DRIVER_RATING;
use crate::matching::{GreedyBatchMatching, MatchingAlgorithmResource, NearestMatching};
use crate::registry;
use crate::scenario::params::ScenarioParams;
use crate::spatial::Point;
use crate::speed::SpeedModel;
use crate::telemetry::SimTelemetry;

/// A queued ride request waiting for its arrival time.
#[derive(Debug, Clone, Copy)]
pub struct PendingRequest {
    pub pickup: Point,
    pub dropoff: Point,
    pub request_time_ms: u64,
}

/// Arrival queue, ordered by request time; the front is consumed when the
/// matching RequestInbound event fires.
#[derive(Debug, Default, Resource)]
pub struct PendingRequests(pub VecDeque<PendingRequest>);

pub fn create_greedy_matching() -> MatchingAlgorithmResource {
    MatchingAlgorithmResource::new(Box::new(GreedyBatchMatching))
}

pub fn create_nearest_matching() -> MatchingAlgorithmResource {
    MatchingAlgorithmResource::new(Box::new(NearestMatching))
}

fn random_point<R: Rng>(rng: &mut R, city_size_km: f64) -> Point {
    Point::new(
        rng.gen_range(0.0..city_size_km),
        rng.gen_range(0.0..city_size_km),
    )
}

/// Populate `world` with every resource and entity a run needs.
///
/// Drivers are spawned up front at seeded-random positions; requests are
/// queued with arrival times uniform over the request window, each with a
/// scheduled RequestInbound event. The first batch matching round is
/// scheduled one interval in.
pub fn build_scenario(world: &mut World, params: ScenarioParams) {
    world.insert_resource(SimulationClock::default());
    world.insert_resource(SimTelemetry::default());
    world.insert_resource(params.pricing);
    world.insert_resource(params.analytics);
    world.insert_resource(params.match_round);
    world.insert_resource(SpeedModel::with_range(
        Some(params.seed),
        params.speed_min_kmh,
        params.speed_max_kmh,
    ));
    world.insert_resource(create_greedy_matching());

    let mut rng = StdRng::seed_from_u64(params.seed);

    for _ in 0..params.num_drivers {
        let position = random_point(&mut rng, params.city_size_km);
        // Positions drawn from a bounded uniform range are always finite.
        let _ = registry::register_driver(world, position, DEFAULT_DRIVER_RATING);
    }

    let mut queue: Vec<PendingRequest> = (0..params.num_requests)
        .map(|_| {
            let pickup = random_point(&mut rng, params.city_size_km);
            let mut dropoff = random_point(&mut rng, params.city_size_km);
            while dropoff == pickup {
                dropoff = random_point(&mut rng, params.city_size_km);
            }
            PendingRequest {
                pickup,
                dropoff,
                request_time_ms: rng.gen_range(0..params.request_window_ms.max(1)),
            }
        })
        .collect();
    queue.sort_by_key(|request| request.request_time_ms);

    {
        let mut clock = world.resource_mut::<SimulationClock>();
        for request in &queue {
            clock.schedule_at(request.request_time_ms, EventKind::RequestInbound, None);
        }
        clock.schedule_at(params.match_round.interval_ms, EventKind::MatchRound, None);
    }
    world.insert_resource(PendingRequests(queue.into()));
}
