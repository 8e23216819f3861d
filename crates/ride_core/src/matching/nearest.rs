use bevy_ecs::prelude::Entity;

use crate::spatial::Point;

use super::algorithm::MatchingAlgorithm;

/// Nearest-available-driver search.
///
/// Scans every available driver and returns the one with the minimum
/// Euclidean distance to the pickup point. Ties are broken by lowest driver
/// entity id so repeated runs over the same snapshot are deterministic.
///
/// Time complexity: O(n) over the available-driver pool.
#[derive(Debug, Default)]
pub struct NearestMatching;

impl MatchingAlgorithm for NearestMatching {
    fn find_match(&self, pickup: Point, available_drivers: &[(Entity, Point)]) -> Option<Entity> {
        let mut best: Option<(Entity, f64)> = None;
        for (driver_entity, driver_pos) in available_drivers {
            let distance = driver_pos.distance(pickup);
            let closer = match best {
                None => true,
                Some((best_entity, best_distance)) => {
                    distance < best_distance
                        || (distance == best_distance && *driver_entity < best_entity)
                }
            };
            if closer {
                best = Some((*driver_entity, distance));
            }
        }
        best.map(|(driver_entity, _)| driver_entity)
    }
}
