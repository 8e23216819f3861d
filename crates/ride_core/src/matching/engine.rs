//! Match commit path: applies a pairing to the registry and creates the trip.
//!
//! Algorithms only propose pairings; every side effect funnels through
//! [commit_match] so the invariants hold in one place: a Busy driver has
//! exactly one open trip and a request maps to at most one trip.

use bevy_ecs::prelude::{Entity, World};

use crate::ecs::{Driver, DriverState, Position, RequestState, RideRequest, Trip, TripState};
use crate::error::SimError;
use crate::registry;

use super::algorithm::MatchingAlgorithm;

/// A committed assignment: statuses flipped, trip spawned in Matched state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCommit {
    pub request_entity: Entity,
    pub driver_entity: Entity,
    pub trip_entity: Entity,
    pub pickup_distance_km: f64,
}

/// Commit a pairing of a Pending request to an Available driver at time `now`.
///
/// Flips the driver to Busy and the request to Matched, and spawns the
/// [Trip] with `matched_at = now`; duration and fare are populated at trip
/// completion. Fails with [SimError::NotFound] for unknown entities and
/// [SimError::InvalidInput] when either side is not in a matchable state.
pub fn commit_match(
    world: &mut World,
    request_entity: Entity,
    driver_entity: Entity,
    now: u64,
) -> Result<MatchCommit, SimError> {
    let request = *world
        .get::<RideRequest>(request_entity)
        .ok_or(SimError::NotFound)?;
    let driver = *world.get::<Driver>(driver_entity).ok_or(SimError::NotFound)?;
    let driver_pos = world
        .get::<Position>(driver_entity)
        .ok_or(SimError::NotFound)?
        .0;

    if request.state != RequestState::Pending {
        return Err(SimError::InvalidInput("request is not pending"));
    }
    if driver.state != DriverState::Available {
        return Err(SimError::InvalidInput("driver is not available"));
    }

    let trip_entity = world
        .spawn(Trip {
            state: TripState::Matched,
            driver: driver_entity,
            request: request_entity,
            pickup: request.pickup,
            dropoff: request.dropoff,
            distance_km: request.pickup.distance(request.dropoff),
            requested_at: request.requested_at,
            matched_at: now,
            pickup_at: None,
            dropoff_at: None,
            fare: None,
        })
        .id();

    {
        let mut driver = world
            .get_mut::<Driver>(driver_entity)
            .ok_or(SimError::NotFound)?;
        driver.state = DriverState::Busy;
        driver.active_trip = Some(trip_entity);
    }
    {
        let mut request = world
            .get_mut::<RideRequest>(request_entity)
            .ok_or(SimError::NotFound)?;
        request.state = RequestState::Matched;
        request.assigned_trip = Some(trip_entity);
    }

    Ok(MatchCommit {
        request_entity,
        driver_entity,
        trip_entity,
        pickup_distance_km: driver_pos.distance(request.pickup),
    })
}

/// Match a single pending request to the nearest available driver and commit.
///
/// Fails with [SimError::NoDriverAvailable] when the available-driver pool is
/// empty, and [SimError::NotFound] when the request id is unknown.
pub fn match_nearest(
    world: &mut World,
    algorithm: &dyn MatchingAlgorithm,
    request_entity: Entity,
    now: u64,
) -> Result<MatchCommit, SimError> {
    let request = *world
        .get::<RideRequest>(request_entity)
        .ok_or(SimError::NotFound)?;
    if request.state != RequestState::Pending {
        return Err(SimError::InvalidInput("request is not pending"));
    }

    let available = registry::available_drivers(world);
    let driver_entity = algorithm
        .find_match(request.pickup, &available)
        .ok_or(SimError::NoDriverAvailable)?;

    commit_match(world, request_entity, driver_entity, now)
}

/// Run one batch round over the current pending/available snapshot and commit
/// every proposed pairing.
///
/// An empty result is a valid outcome (no pending requests, or no registered
/// drivers); unmatched requests stay Pending for the next round.
pub fn match_batch(
    world: &mut World,
    algorithm: &dyn MatchingAlgorithm,
    now: u64,
) -> Vec<MatchCommit> {
    let requests = registry::pending_requests(world);
    let available = registry::available_drivers(world);
    if requests.is_empty() || available.is_empty() {
        return Vec::new();
    }

    algorithm
        .find_batch_matches(&requests, &available)
        .into_iter()
        .filter_map(|m| commit_match(world, m.request_entity, m.driver_entity, now).ok())
        .collect()
}
