//! Eviction engines (page-replacement policies).
//!
//! Every engine owns a fixed number of frames and a resident set, and
//! answers one question per access: hit or fault, and if a fault forced an
//! eviction, which page went.
//!
//! # Components
//! - [`ReplacementPolicy`] - The engine interface
//! - [`FifoPolicy`] - Evicts the earliest admitted page
//! - [`MfuPolicy`] - Evicts the most frequently accessed page
//! - [`AccessStats`] - Hit/fault/eviction counters
//! - [`PolicyKind`] - Selects and builds an engine

mod fifo;
mod mfu;
mod stats;

use std::fmt;

pub use fifo::FifoPolicy;
pub use mfu::MfuPolicy;
pub use stats::AccessStats;

use crate::common::PageId;
use crate::trace::Trace;

/// What a single access did to an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The page was resident. Nothing changed besides the hit counter.
    Hit,

    /// The page was missing. `evicted` is the victim, if room had to be made.
    Fault { evicted: Option<PageId> },
}

impl AccessOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, AccessOutcome::Hit)
    }
}

/// A page-replacement policy simulating a fixed set of physical frames.
///
/// Implementations must keep `resident_count() <= capacity()` after every
/// access and count each access exactly once as a hit or a fault.
/// A capacity of zero is valid: every access faults and nothing is admitted.
pub trait ReplacementPolicy {
    /// Short policy label, e.g. `"FIFO"`.
    fn name(&self) -> &'static str;

    /// Reference `page`, evicting a victim if it is missing and frames are full.
    fn access(&mut self, page: PageId) -> AccessOutcome;

    /// Number of frames, fixed at construction.
    fn capacity(&self) -> usize;

    /// Number of pages currently resident.
    fn resident_count(&self) -> usize;

    /// Whether `page` is currently resident.
    fn contains(&self, page: PageId) -> bool;

    /// Snapshot of the counters.
    fn stats(&self) -> AccessStats;

    fn hit_count(&self) -> u64 {
        self.stats().hits
    }

    fn fault_count(&self) -> u64 {
        self.stats().faults
    }
}

/// The available eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Mfu,
}

impl PolicyKind {
    /// All policies, in reporting order.
    pub const ALL: [PolicyKind; 2] = [PolicyKind::Fifo, PolicyKind::Mfu];

    /// Build a fresh engine of this kind.
    ///
    /// `page_range` is only a sizing hint; FIFO ignores it.
    pub fn build(self, capacity: usize, page_range: u32) -> Box<dyn ReplacementPolicy> {
        match self {
            PolicyKind::Fifo => Box::new(FifoPolicy::new(capacity)),
            PolicyKind::Mfu => Box::new(MfuPolicy::new(capacity, page_range)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Fifo => write!(f, "FIFO"),
            PolicyKind::Mfu => write!(f, "MFU"),
        }
    }
}

/// Feed every page of `trace` to `policy` in order and return its counters.
///
/// # Example
/// ```
/// use pagesim::{simulate, FifoPolicy, Trace};
///
/// let trace = Trace::from_pages([1, 1, 2, 2]);
/// let stats = simulate(&mut FifoPolicy::new(1), &trace);
/// assert_eq!(stats.faults, 2);
/// assert_eq!(stats.hits, 2);
/// ```
pub fn simulate<P>(policy: &mut P, trace: &Trace) -> AccessStats
where
    P: ReplacementPolicy + ?Sized,
{
    for &page in trace.iter() {
        policy.access(page);
    }
    policy.stats()
}
