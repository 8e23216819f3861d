pub mod analytics;
pub mod clock;
pub mod ecs;
pub mod error;
pub mod matching;
pub mod pricing;
pub mod registry;
pub mod runner;
pub mod scenario;
pub mod spatial;
pub mod speed;
pub mod systems;
pub mod telemetry;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
