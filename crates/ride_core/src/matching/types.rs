use bevy_ecs::prelude::Entity;

/// A potential request-driver pairing with its pickup distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCandidate {
    pub request_entity: Entity,
    pub driver_entity: Entity,
    pub pickup_distance_km: f64,
}

/// A successful pairing returned by a matching algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub request_entity: Entity,
    pub driver_entity: Entity,
}
