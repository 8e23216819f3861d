//! Trip started system: the driver reaches pickup and the ride begins.

use bevy_ecs::prelude::World;

use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::ecs::{Position, RequestState, RideRequest, Trip, TripState};
use crate::speed::SpeedModel;

pub fn trip_started_system(world: &mut World) {
    let event = world.resource::<CurrentEvent>().0;
    if event.kind != EventKind::TripStarted {
        return;
    }
    let Some(EventSubject::Trip(trip_entity)) = event.subject else {
        return;
    };
    let now = world.resource::<SimulationClock>().now();

    let (driver_entity, request_entity, pickup, distance_km) = {
        let Some(mut trip) = world.get_mut::<Trip>(trip_entity) else {
            return;
        };
        if trip.state != TripState::Matched {
            return;
        }
        trip.state = TripState::OnTrip;
        trip.pickup_at = Some(now);
        (trip.driver, trip.request, trip.pickup, trip.distance_km)
    };

    if let Some(mut request) = world.get_mut::<RideRequest>(request_entity) {
        request.state = RequestState::InProgress;
    }
    if let Some(mut position) = world.get_mut::<Position>(driver_entity) {
        position.0 = pickup;
    }

    let ride_travel_ms = world
        .resource_mut::<SpeedModel>()
        .travel_time_ms(distance_km);
    world.resource_mut::<SimulationClock>().schedule_in(
        ride_travel_ms,
        EventKind::TripCompleted,
        Some(EventSubject::Trip(trip_entity)),
    );
}
