//! Error types for the simulator.

use thiserror::Error;

use crate::experiment::ExperimentKind;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Every configuration error the simulator can report.
///
/// The simulation itself has no failure surface: once an experiment's
/// parameters are validated, every trial runs to completion. All variants
/// describe malformed input and are raised before any trial starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The experiment kind string did not name a known sweep dimension.
    #[error("Unknown experiment kind: {0:?} (expected \"length\", \"frames\" or \"locality\")")]
    UnknownExperimentKind(String),

    /// Pages are drawn from `[0, page_range)`, so the range must be non-empty.
    #[error("Invalid page range: {0} (must be at least 1)")]
    InvalidPageRange(u32),

    /// Locality is a probability.
    #[error("Invalid locality factor: {0} (must be within [0, 1])")]
    InvalidLocality(f64),

    /// A swept trace length or frame count was not a non-negative integer.
    #[error("Invalid {kind} value: {value} (must be a non-negative integer)")]
    InvalidSweepValue { kind: ExperimentKind, value: f64 },

    /// Averaging over zero trials is undefined.
    #[error("Repetitions must be at least 1")]
    ZeroRepetitions,
}
