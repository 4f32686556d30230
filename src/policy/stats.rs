//! Per-engine access counters.

use std::fmt;

/// Hit, fault and eviction tallies for one eviction engine.
///
/// Counters start at zero and only ever grow. The struct is `Copy`, so
/// [`ReplacementPolicy::stats`](super::ReplacementPolicy::stats) hands out a
/// snapshot that can be printed or compared after the engine is dropped.
///
/// # Example
/// ```
/// use pagesim::AccessStats;
///
/// let stats = AccessStats { hits: 1, faults: 1, evictions: 0 };
/// assert_eq!(stats.total(), 2);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessStats {
    /// Accesses that found the page resident.
    pub hits: u64,

    /// Accesses that found the page missing.
    pub faults: u64,

    /// Resident pages removed to make room.
    pub evictions: u64,
}

impl AccessStats {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    #[inline]
    pub(crate) fn record_fault(&mut self) {
        self.faults += 1;
    }

    #[inline]
    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Total accesses seen.
    pub fn total(&self) -> u64 {
        self.hits + self.faults
    }

    /// Fraction of accesses that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Fraction of accesses that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.faults as f64 / total as f64
        }
    }
}

impl fmt::Display for AccessStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
