//! Default experiment parameters.
//!
//! An experiment varies exactly one of trace length, frame count and
//! locality. The other two fall back to the values below.

/// Number of accesses in a generated trace when length is not swept.
pub const DEFAULT_TRACE_LENGTH: usize = 200;

/// Number of physical frames when frame count is not swept.
pub const DEFAULT_FRAMES: usize = 3;

/// Probability of a local step when locality is not swept.
pub const DEFAULT_LOCALITY: f64 = 0.6;

/// Trials averaged per swept value.
pub const DEFAULT_REPETITIONS: usize = 5;

/// Largest trace length or frame count a sweep accepts.
pub const MAX_SWEEP_COUNT: usize = u32::MAX as usize;

/// Size of the page identifier space: pages are drawn from `[0, 10)`.
pub const DEFAULT_PAGE_RANGE: u32 = 10;
