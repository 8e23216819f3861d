use bevy_ecs::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::ONE_SEC_MS;

/// Driving speed model used to turn distances into travel times.
///
/// Samples a speed per leg from a uniform km/h range; seeded for
/// reproducible runs.
#[derive(Resource)]
pub struct SpeedModel {
    rng: StdRng,
    min_kmh: f64,
    max_kmh: f64,
}

impl SpeedModel {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_range(seed, 20.0, 60.0)
    }

    pub fn with_range(seed: Option<u64>, min_kmh: f64, max_kmh: f64) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            min_kmh,
            max_kmh,
        }
    }

    pub fn sample_kmh(&mut self) -> f64 {
        self.rng.gen_range(self.min_kmh..=self.max_kmh).max(1.0)
    }

    /// Travel time for one leg in simulation ms, with a 1 s floor.
    pub fn travel_time_ms(&mut self, distance_km: f64) -> u64 {
        if distance_km <= 0.0 {
            return ONE_SEC_MS;
        }
        let kmh = self.sample_kmh();
        ((distance_km / kmh) * 3_600_000.0).max(ONE_SEC_MS as f64) as u64
    }
}
