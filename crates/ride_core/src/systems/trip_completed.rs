//! Trip completed system: finalize the trip, price it, free the driver.

use bevy_ecs::prelude::World;

use crate::analytics::{trip_score, AnalyticsConfig};
use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::ecs::{Driver, DriverState, Position, RequestState, RideRequest, Trip, TripState};
use crate::pricing::{estimate_fare, PricingConfig};
use crate::telemetry::{CompletedTripRecord, SimTelemetry};

pub fn trip_completed_system(world: &mut World) {
    let event = world.resource::<CurrentEvent>().0;
    if event.kind != EventKind::TripCompleted {
        return;
    }
    let Some(EventSubject::Trip(trip_entity)) = event.subject else {
        return;
    };
    let now = world.resource::<SimulationClock>().now();
    let pricing = world
        .get_resource::<PricingConfig>()
        .copied()
        .unwrap_or_default();
    let analytics = world
        .get_resource::<AnalyticsConfig>()
        .copied()
        .unwrap_or_default();

    let completed = {
        let Some(mut trip) = world.get_mut::<Trip>(trip_entity) else {
            return;
        };
        if trip.state != TripState::OnTrip {
            return;
        }
        let pickup_at = trip.pickup_at.unwrap_or(trip.matched_at);
        let duration_ms = now.saturating_sub(pickup_at);
        // Distance and duration are non-negative here, so pricing cannot fail.
        let fare = estimate_fare(
            &pricing,
            trip.distance_km,
            Some(duration_ms as f64 / 60_000.0),
        )
        .unwrap_or(pricing.base_fare);

        trip.state = TripState::Completed;
        trip.dropoff_at = Some(now);
        trip.fare = Some(fare);
        *trip
    };

    let wait_ms = completed.matched_at.saturating_sub(completed.requested_at);
    let duration_ms = now.saturating_sub(completed.pickup_at.unwrap_or(completed.matched_at));
    let fare = completed.fare.unwrap_or(pricing.base_fare);
    // Passenger experience on a 1-5 star scale, from the same curve the
    // satisfaction index uses.
    let stars = 1.0 + 4.0 * trip_score(&analytics, wait_ms, duration_ms) / 100.0;

    if let Some(mut driver) = world.get_mut::<Driver>(completed.driver) {
        driver.state = DriverState::Available;
        driver.active_trip = None;
        driver.record_completed_trip(fare, stars);
    }
    if let Some(mut position) = world.get_mut::<Position>(completed.driver) {
        position.0 = completed.dropoff;
    }
    if let Some(mut request) = world.get_mut::<RideRequest>(completed.request) {
        request.state = RequestState::Completed;
    }

    if let Some(mut telemetry) = world.get_resource_mut::<SimTelemetry>() {
        telemetry.completed_trips.push(CompletedTripRecord {
            trip_entity,
            request_entity: completed.request,
            driver_entity: completed.driver,
            requested_at: completed.requested_at,
            matched_at: completed.matched_at,
            pickup_at: completed.pickup_at.unwrap_or(completed.matched_at),
            completed_at: now,
            distance_km: completed.distance_km,
            fare,
        });
    }
}
