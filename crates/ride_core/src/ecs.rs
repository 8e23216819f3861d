use bevy_ecs::prelude::{Component, Entity};

use crate::spatial::Point;

/// Initial rating assigned to a driver when none is supplied.
pub const DEFAULT_DRIVER_RATING: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Available,
    Busy,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Driver {
    pub state: DriverState,
    /// Rolling average of per-trip ratings, starts at [DEFAULT_DRIVER_RATING].
    pub rating: f64,
    pub trips_completed: u64,
    pub earnings: f64,
    /// The open trip while Busy; `None` while Available or Offline.
    pub active_trip: Option<Entity>,
}

impl Driver {
    pub fn available(rating: f64) -> Self {
        Self {
            state: DriverState::Available,
            rating,
            trips_completed: 0,
            earnings: 0.0,
            active_trip: None,
        }
    }

    /// Fold a finished trip into the driver's stats: earnings, trip count and
    /// the rolling rating average.
    pub fn record_completed_trip(&mut self, fare: f64, trip_rating: f64) {
        self.earnings += fare;
        let completed = self.trips_completed as f64;
        self.rating = (self.rating * completed + trip_rating) / (completed + 1.0);
        self.trips_completed += 1;
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Pending,
    Matched,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct RideRequest {
    pub state: RequestState,
    pub pickup: Point,
    pub dropoff: Point,
    /// Simulation time (ms) when the request was created.
    pub requested_at: u64,
    /// Trip spawned at match commit; `None` while Pending.
    pub assigned_trip: Option<Entity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripState {
    Matched,
    OnTrip,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Trip {
    pub state: TripState,
    pub driver: Entity,
    pub request: Entity,
    pub pickup: Point,
    pub dropoff: Point,
    /// Pickup-to-dropoff distance, fixed at match commit.
    pub distance_km: f64,
    /// Simulation time (ms) when the request was created (RideRequest.requested_at).
    pub requested_at: u64,
    /// Simulation time (ms) when the match was committed (Trip created).
    pub matched_at: u64,
    /// Simulation time (ms) when the driver reached pickup; set in trip_started_system.
    pub pickup_at: Option<u64>,
    /// Simulation time (ms) when the driver reached dropoff; set in trip_completed_system.
    pub dropoff_at: Option<u64>,
    /// Final fare, priced at completion once the duration is known.
    pub fare: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Position(pub Point);
