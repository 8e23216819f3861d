//! Pricing: converts trip distance (and optionally duration) into a fare.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Fixed pricing policy, passed in at scenario construction.
#[derive(Debug, Clone, Copy, PartialEq, Resource, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat starting charge in currency units.
    pub base_fare: f64,
    /// Charge per kilometer.
    pub per_km_rate: f64,
    /// Charge per minute on trip; 0 disables the time component.
    pub per_minute_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_fare: 2.50,
            per_km_rate: 1.50,
            per_minute_rate: 0.20,
        }
    }
}

/// Calculate the fare for a trip.
///
/// Formula: `fare = base_fare + distance_km * per_km_rate [+ duration_min * per_minute_rate]`
///
/// Fails with [SimError::InvalidInput] when distance or duration is negative;
/// total for all non-negative inputs. Monotonically non-decreasing in each
/// argument.
pub fn estimate_fare(
    config: &PricingConfig,
    distance_km: f64,
    duration_min: Option<f64>,
) -> Result<f64, SimError> {
    if distance_km.is_nan() || distance_km < 0.0 {
        return Err(SimError::InvalidInput("distance must be non-negative"));
    }
    let mut fare = config.base_fare + distance_km * config.per_km_rate;
    if let Some(duration) = duration_min {
        if duration.is_nan() || duration < 0.0 {
            return Err(SimError::InvalidInput("duration must be non-negative"));
        }
        fare += duration * config.per_minute_rate;
    }
    Ok(fare)
}
