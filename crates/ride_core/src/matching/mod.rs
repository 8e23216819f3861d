pub mod algorithm;
pub mod engine;
pub mod greedy;
pub mod nearest;
pub mod types;

use bevy_ecs::prelude::Resource;

pub use algorithm::MatchingAlgorithm;
pub use engine::{commit_match, match_batch, match_nearest, MatchCommit};
pub use greedy::GreedyBatchMatching;
pub use nearest::NearestMatching;
pub use types::{MatchCandidate, MatchResult};

/// Resource wrapper for the matching algorithm trait object.
#[derive(Resource)]
pub struct MatchingAlgorithmResource(pub Box<dyn MatchingAlgorithm>);

impl MatchingAlgorithmResource {
    pub fn new(algorithm: Box<dyn MatchingAlgorithm>) -> Self {
        Self(algorithm)
    }
}

impl std::ops::Deref for MatchingAlgorithmResource {
    type Target = dyn MatchingAlgorithm;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
