use bevy_ecs::prelude::Entity;

use crate::spatial::Point;

use super::types::MatchResult;

/// Trait for matching algorithms that pair pending requests with drivers.
///
/// Algorithms operate on a snapshot of the current available drivers and
/// pending requests; they never look ahead into future requests. All side
/// effects (status flips, trip creation) happen in the commit path, not here.
pub trait MatchingAlgorithm: Send + Sync {
    /// Find a driver for a single pickup point.
    ///
    /// `available_drivers` is sorted by entity id; an algorithm that scans in
    /// order and keeps the first best candidate therefore breaks ties by
    /// lowest driver id. Returns `None` when the pool is empty or no driver
    /// qualifies.
    fn find_match(&self, pickup: Point, available_drivers: &[(Entity, Point)]) -> Option<Entity>;

    /// Find pairings for a batch of pending requests.
    ///
    /// The default implementation matches requests sequentially, removing each
    /// committed driver from the pool so no driver is assigned twice.
    /// Algorithms can override this to optimize across the whole batch.
    ///
    /// Requests that cannot be matched are left out of the result; an empty
    /// result is a valid outcome, not an error.
    fn find_batch_matches(
        &self,
        requests: &[(Entity, Point)],
        available_drivers: &[(Entity, Point)],
    ) -> Vec<MatchResult> {
        let mut pool: Vec<(Entity, Point)> = available_drivers.to_vec();
        let mut matches = Vec::new();
        for (request_entity, pickup) in requests {
            let Some(driver_entity) = self.find_match(*pickup, &pool) else {
                continue;
            };
            pool.retain(|(entity, _)| *entity != driver_entity);
            matches.push(MatchResult {
                request_entity: *request_entity,
                driver_entity,
            });
        }
        matches
    }
}
