//! Simulation runner: advances the clock and routes events into the ECS.
//!
//! Clock progression happens here, outside systems. Each step pops the next
//! event from [SimulationClock], inserts it as [CurrentEvent], then runs the
//! schedule; systems gate on the event kind.

use bevy_ecs::prelude::{Res, Schedule, World};
use bevy_ecs::schedule::{apply_deferred, IntoSystemConfigs};

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::systems::{
    batch_matching::batch_matching_system, request_inbound::request_inbound_system,
    trip_completed::trip_completed_system, trip_started::trip_started_system,
};

fn is_request_inbound(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::RequestInbound)
        .unwrap_or(false)
}

fn is_match_round(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::MatchRound)
        .unwrap_or(false)
}

fn is_trip_started(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::TripStarted)
        .unwrap_or(false)
}

fn is_trip_completed(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::TripCompleted)
        .unwrap_or(false)
}

/// Builds the default simulation schedule: all event-reacting systems plus
/// [apply_deferred] so spawned requests are visible before matching runs.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            request_inbound_system.run_if(is_request_inbound),
            apply_deferred,
            batch_matching_system.run_if(is_match_round),
            trip_started_system.run_if(is_trip_started),
            trip_completed_system.run_if(is_trip_completed),
        )
            .chain(),
    );
    schedule
}

/// Runs one simulation step: pops the next event, inserts it as
/// [CurrentEvent], then runs the schedule. Returns `false` when the clock is
/// empty.
pub fn run_next_event(world: &mut World, schedule: &mut Schedule) -> bool {
    let event = match world.resource_mut::<SimulationClock>().pop_next() {
        Some(event) => event,
        None => return false,
    };
    world.insert_resource(CurrentEvent(event));
    schedule.run(world);
    true
}

/// Runs simulation steps until the event queue is empty or `max_steps` is
/// reached. Returns the number of steps executed.
pub fn run_until_empty(world: &mut World, schedule: &mut Schedule, max_steps: usize) -> usize {
    let mut steps = 0;
    while steps < max_steps && run_next_event(world, schedule) {
        steps += 1;
    }
    steps
}
