//! Shared utilities.

/// Millisecond wall clock for event timestamps.
pub mod clock;
/// Telemetry bootstrap.
pub mod telemetry;

pub use clock::*;
pub use telemetry::*;
