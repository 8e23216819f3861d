//! Batch matching system: run a global matching pass when MatchRound fires.
//!
//! Collects the current pending/available snapshot, runs the configured
//! matching algorithm through the commit path, schedules a TripStarted event
//! per commit, and schedules the next round while unmatched work remains.

use bevy_ecs::prelude::World;

use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::ecs::{Driver, DriverState};
use crate::matching::{match_batch, MatchingAlgorithmResource};
use crate::registry;
use crate::scenario::{MatchRoundConfig, PendingRequests};
use crate::speed::SpeedModel;

pub fn batch_matching_system(world: &mut World) {
    let event = world.resource::<CurrentEvent>().0;
    if event.kind != EventKind::MatchRound {
        return;
    }
    let now = world.resource::<SimulationClock>().now();

    let commits =
        world.resource_scope(|world, algorithm: bevy_ecs::prelude::Mut<MatchingAlgorithmResource>| {
            match_batch(world, &*algorithm.0, now)
        });

    for commit in &commits {
        let pickup_travel_ms = world
            .resource_mut::<SpeedModel>()
            .travel_time_ms(commit.pickup_distance_km);
        world.resource_mut::<SimulationClock>().schedule_in(
            pickup_travel_ms,
            EventKind::TripStarted,
            Some(EventSubject::Trip(commit.trip_entity)),
        );
    }

    // Schedule the next round while there is work the fleet can still absorb.
    // Without the fleet check, pending requests over an all-offline fleet
    // would reschedule rounds forever and the event queue would never drain.
    let queued_arrivals = world
        .get_resource::<PendingRequests>()
        .map(|queue| !queue.0.is_empty())
        .unwrap_or(false);
    let pending_left = !registry::pending_requests(world).is_empty();
    let fleet_active = world
        .query::<&Driver>()
        .iter(world)
        .any(|driver| driver.state != DriverState::Offline);
    if queued_arrivals || (pending_left && fleet_active) {
        let interval_ms = world
            .get_resource::<MatchRoundConfig>()
            .copied()
            .unwrap_or_default()
            .interval_ms;
        world
            .resource_mut::<SimulationClock>()
            .schedule_in(interval_ms, EventKind::MatchRound, None);
    }
}
