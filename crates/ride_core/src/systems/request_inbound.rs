//! Request inbound system: a queued request arrives and enters the registry.

use bevy_ecs::prelude::{Commands, Res, ResMut};

use crate::clock::{CurrentEvent, EventKind};
use crate::ecs::{RequestState, RideRequest};
use crate::scenario::PendingRequests;

pub fn request_inbound_system(
    mut commands: Commands,
    event: Res<CurrentEvent>,
    mut queue: ResMut<PendingRequests>,
) {
    if event.0.kind != EventKind::RequestInbound {
        return;
    }
    let Some(pending) = queue.0.pop_front() else {
        return;
    };
    debug_assert_eq!(pending.request_time_ms, event.0.timestamp);

    commands.spawn(RideRequest {
        state: RequestState::Pending,
        pickup: pending.pickup,
        dropoff: pending.dropoff,
        requested_at: event.0.timestamp,
        assigned_trip: None,
    });
}
