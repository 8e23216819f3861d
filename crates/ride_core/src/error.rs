use std::fmt;

/// Errors surfaced by registry, pricing and matching operations.
///
/// All variants are recoverable at the call site; the engine never terminates
/// the process. Empty results (an empty batch match, a report over zero
/// trips) are successes, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The given entity id does not exist or is not of the expected kind.
    NotFound,
    /// Negative distance/duration or a malformed (non-finite) position.
    InvalidInput(&'static str),
    /// Nearest-match was asked to pick from an empty available-driver pool.
    NoDriverAvailable,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NotFound => write!(f, "entity not found"),
            SimError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            SimError::NoDriverAvailable => write!(f, "no available driver"),
        }
    }
}

impl std::error::Error for SimError {}
