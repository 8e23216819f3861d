use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::analytics::AnalyticsConfig;
use crate::clock::ONE_SEC_MS;
use crate::pricing::PricingConfig;

/// How often a batch matching round runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource, Serialize, Deserialize)]
pub struct MatchRoundConfig {
    pub interval_ms: u64,
}

impl Default for MatchRoundConfig {
    fn default() -> Self {
        Self {
            interval_ms: 10 * ONE_SEC_MS,
        }
    }
}

/// Full parameter set for [super::build_scenario].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub num_drivers: usize,
    pub num_requests: usize,
    pub seed: u64,
    /// Side length of the square city in km; positions are drawn uniformly.
    pub city_size_km: f64,
    /// Requests arrive uniformly over this window.
    pub request_window_ms: u64,
    pub match_round: MatchRoundConfig,
    pub speed_min_kmh: f64,
    pub speed_max_kmh: f64,
    pub pricing: PricingConfig,
    pub analytics: AnalyticsConfig,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            num_drivers: 20,
            num_requests: 100,
            seed: 42,
            city_size_km: 20.0,
            request_window_ms: 60 * 60 * ONE_SEC_MS,
            match_round: MatchRoundConfig::default(),
            speed_min_kmh: 20.0,
            speed_max_kmh: 60.0,
            pricing: PricingConfig::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl ScenarioParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_request_window_ms(mut self, window_ms: u64) -> Self {
        self.request_window_ms = window_ms;
        self
    }

    pub fn with_match_interval_ms(mut self, interval_ms: u64) -> Self {
        self.match_round = MatchRoundConfig {
            interval_ms,
        };
        self
    }

    pub fn with_speed_range(mut self, min_kmh: f64, max_kmh: f64) -> Self {
        self.speed_min_kmh = min_kmh;
        self.speed_max_kmh = max_kmh;
        self
    }

    pub fn with_pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_analytics(mut self, analytics: AnalyticsConfig) -> Self {
        self.analytics = analytics;
        self
    }
}
