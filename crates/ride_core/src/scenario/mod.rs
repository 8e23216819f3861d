//! Scenario setup: seedable construction of a full simulation world.
//!
//! A scenario spawns the driver fleet, queues ride requests with arrival
//! times spread over the request window, and schedules the events that drive
//! the run.

mod build;
mod params;

pub use build::{
    build_scenario, create_greedy_matching, create_nearest_matching, PendingRequest,
    PendingRequests,
};
pub use params::{MatchRoundConfig, ScenarioParams};
