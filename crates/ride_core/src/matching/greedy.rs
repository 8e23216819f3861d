use bevy_ecs::prelude::Entity;

use crate::spatial::Point;

use super::algorithm::MatchingAlgorithm;
use super::nearest::NearestMatching;
use super::types::{MatchCandidate, MatchResult};

/// Greedy global batch optimizer.
///
/// Repeatedly commits the (request, driver) pair with the smallest pickup
/// distance among all remaining unmatched requests and drivers, removes both
/// from their pools, and repeats until one pool is exhausted. This
/// nearest-pair-first strategy approximates minimizing total passenger wait;
/// it is not guaranteed globally optimal (that would take a weighted
/// bipartite-matching solver) but is deterministic under the fixed tie-break
/// of lowest request id, then lowest driver id.
///
/// Time complexity: O(requests x drivers) per committed pair.
#[derive(Debug, Default)]
pub struct GreedyBatchMatching;

impl GreedyBatchMatching {
    fn closest_pair(
        requests: &[(Entity, Point)],
        drivers: &[(Entity, Point)],
    ) -> Option<MatchCandidate> {
        let mut best: Option<MatchCandidate> = None;
        for (request_entity, pickup) in requests {
            for (driver_entity, driver_pos) in drivers {
                let distance = driver_pos.distance(*pickup);
                let candidate = MatchCandidate {
                    request_entity: *request_entity,
                    driver_entity: *driver_entity,
                    pickup_distance_km: distance,
                };
                let better = match &best {
                    None => true,
                    Some(current) => {
                        distance < current.pickup_distance_km
                            || (distance == current.pickup_distance_km
                                && (candidate.request_entity, candidate.driver_entity)
                                    < (current.request_entity, current.driver_entity))
                    }
                };
                if better {
                    best = Some(candidate);
                }
            }
        }
        best
    }
}

impl MatchingAlgorithm for GreedyBatchMatching {
    /// Single-request matching degenerates to the nearest-driver search.
    fn find_match(&self, pickup: Point, available_drivers: &[(Entity, Point)]) -> Option<Entity> {
        NearestMatching.find_match(pickup, available_drivers)
    }

    fn find_batch_matches(
        &self,
        requests: &[(Entity, Point)],
        available_drivers: &[(Entity, Point)],
    ) -> Vec<MatchResult> {
        let mut remaining_requests: Vec<(Entity, Point)> = requests.to_vec();
        let mut remaining_drivers: Vec<(Entity, Point)> = available_drivers.to_vec();
        let mut matches = Vec::new();

        while !remaining_requests.is_empty() && !remaining_drivers.is_empty() {
            let Some(pair) = Self::closest_pair(&remaining_requests, &remaining_drivers) else {
                break;
            };
            remaining_requests.retain(|(entity, _)| *entity != pair.request_entity);
            remaining_drivers.retain(|(entity, _)| *entity != pair.driver_entity);
            matches.push(MatchResult {
                request_entity: pair.request_entity,
                driver_entity: pair.driver_entity,
            });
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: u32, x: f64, y: f64) -> (Entity, Point) {
        (Entity::from_raw(id), Point::new(x, y))
    }

    #[test]
    fn assigns_globally_closest_pairs_first() {
        // Drivers at (0,0), (5,5), (1,1); pickups at (0,0) and (1,2).
        let drivers = vec![
            request(10, 0.0, 0.0),
            request(11, 5.0, 5.0),
            request(12, 1.0, 1.0),
        ];
        let requests = vec![request(1, 0.0, 0.0), request(2, 1.0, 2.0)];

        let matches = GreedyBatchMatching.find_batch_matches(&requests, &drivers);
        assert_eq!(matches.len(), 2);
        assert_eq!(
            matches[0],
            MatchResult {
                request_entity: Entity::from_raw(1),
                driver_entity: Entity::from_raw(10),
            }
        );
        assert_eq!(
            matches[1],
            MatchResult {
                request_entity: Entity::from_raw(2),
                driver_entity: Entity::from_raw(12),
            }
        );
    }

    #[test]
    fn result_pairs_are_disjoint() {
        let drivers: Vec<(Entity, Point)> = (0..4)
            .map(|i| request(100 + i, i as f64, 0.0))
            .collect();
        let requests: Vec<(Entity, Point)> = (0..6)
            .map(|i| request(i, i as f64 * 0.5, 1.0))
            .collect();

        let matches = GreedyBatchMatching.find_batch_matches(&requests, &drivers);
        assert_eq!(matches.len(), 4, "result size = min(#requests, #drivers)");

        let mut seen_requests: Vec<Entity> = matches.iter().map(|m| m.request_entity).collect();
        let mut seen_drivers: Vec<Entity> = matches.iter().map(|m| m.driver_entity).collect();
        seen_requests.sort();
        seen_requests.dedup();
        seen_drivers.sort();
        seen_drivers.dedup();
        assert_eq!(seen_requests.len(), matches.len());
        assert_eq!(seen_drivers.len(), matches.len());
    }

    #[test]
    fn identical_input_yields_identical_assignment() {
        let drivers: Vec<(Entity, Point)> = (0..5)
            .map(|i| request(50 + i, (i as f64).cos() * 3.0, (i as f64).sin() * 3.0))
            .collect();
        let requests: Vec<(Entity, Point)> = (0..5)
            .map(|i| request(i, i as f64, 5.0 - i as f64))
            .collect();

        let first = GreedyBatchMatching.find_batch_matches(&requests, &drivers);
        let second = GreedyBatchMatching.find_batch_matches(&requests, &drivers);
        assert_eq!(first, second);
    }

    #[test]
    fn ties_break_by_request_then_driver_id() {
        // Two requests and two drivers all at the same point: every pairing
        // has distance zero, so the tie-break alone decides the outcome.
        let drivers = vec![request(21, 0.0, 0.0), request(20, 0.0, 0.0)];
        let requests = vec![request(3, 0.0, 0.0), request(2, 0.0, 0.0)];

        let matches = GreedyBatchMatching.find_batch_matches(&requests, &drivers);
        assert_eq!(
            matches,
            vec![
                MatchResult {
                    request_entity: Entity::from_raw(2),
                    driver_entity: Entity::from_raw(20),
                },
                MatchResult {
                    request_entity: Entity::from_raw(3),
                    driver_entity: Entity::from_raw(21),
                },
            ]
        );
    }

    #[test]
    fn empty_driver_pool_yields_empty_assignment() {
        let requests = vec![request(1, 0.0, 0.0)];
        let matches = GreedyBatchMatching.find_batch_matches(&requests, &[]);
        assert!(matches.is_empty());
    }
}
