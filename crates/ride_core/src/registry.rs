//! Entity registry: typed operations over the simulation [World].
//!
//! The world is the only shared mutable state and is owned by the caller
//! (runner, CLI, or test); the registry holds no global state of its own.
//! Listings are sorted by entity id so that matching has a documented,
//! deterministic iteration order.

use bevy_ecs::prelude::{Entity, World};

use crate::ecs::{Driver, DriverState, Position, RequestState, RideRequest};
use crate::error::SimError;
use crate::spatial::Point;

pub fn register_driver(
    world: &mut World,
    position: Point,
    rating: f64,
) -> Result<Entity, SimError> {
    if !position.is_finite() {
        return Err(SimError::InvalidInput("driver position is not finite"));
    }
    Ok(world
        .spawn((Driver::available(rating), Position(position)))
        .id())
}

pub fn register_request(
    world: &mut World,
    pickup: Point,
    dropoff: Point,
    requested_at: u64,
) -> Result<Entity, SimError> {
    if !pickup.is_finite() || !dropoff.is_finite() {
        return Err(SimError::InvalidInput("request position is not finite"));
    }
    if pickup == dropoff {
        return Err(SimError::InvalidInput("pickup and dropoff are identical"));
    }
    Ok(world
        .spawn(RideRequest {
            state: RequestState::Pending,
            pickup,
            dropoff,
            requested_at,
            assigned_trip: None,
        })
        .id())
}

/// All drivers in the given state with their positions, sorted by entity id.
pub fn drivers_in_state(world: &mut World, state: DriverState) -> Vec<(Entity, Point)> {
    let mut drivers: Vec<(Entity, Point)> = world
        .query::<(Entity, &Driver, &Position)>()
        .iter(world)
        .filter(|(_, driver, _)| driver.state == state)
        .map(|(entity, _, position)| (entity, position.0))
        .collect();
    drivers.sort_by_key(|(entity, _)| *entity);
    drivers
}

/// All requests in the given state with their pickup points, sorted by entity id.
pub fn requests_in_state(world: &mut World, state: RequestState) -> Vec<(Entity, Point)> {
    let mut requests: Vec<(Entity, Point)> = world
        .query::<(Entity, &RideRequest)>()
        .iter(world)
        .filter(|(_, request)| request.state == state)
        .map(|(entity, request)| (entity, request.pickup))
        .collect();
    requests.sort_by_key(|(entity, _)| *entity);
    requests
}

pub fn available_drivers(world: &mut World) -> Vec<(Entity, Point)> {
    drivers_in_state(world, DriverState::Available)
}

pub fn pending_requests(world: &mut World) -> Vec<(Entity, Point)> {
    requests_in_state(world, RequestState::Pending)
}

pub fn update_driver_position(
    world: &mut World,
    driver: Entity,
    position: Point,
) -> Result<(), SimError> {
    if !position.is_finite() {
        return Err(SimError::InvalidInput("driver position is not finite"));
    }
    if world.get::<Driver>(driver).is_none() {
        return Err(SimError::NotFound);
    }
    let mut pos = world.get_mut::<Position>(driver).ok_or(SimError::NotFound)?;
    pos.0 = position;
    Ok(())
}

pub fn set_driver_state(
    world: &mut World,
    driver: Entity,
    state: DriverState,
) -> Result<(), SimError> {
    let mut component = world.get_mut::<Driver>(driver).ok_or(SimError::NotFound)?;
    component.state = state;
    if state != DriverState::Busy {
        component.active_trip = None;
    }
    Ok(())
}

pub fn set_request_state(
    world: &mut World,
    request: Entity,
    state: RequestState,
) -> Result<(), SimError> {
    let mut component = world
        .get_mut::<RideRequest>(request)
        .ok_or(SimError::NotFound)?;
    component.state = state;
    Ok(())
}
