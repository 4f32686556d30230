//! MFU (Most-Frequently-Used) replacement policy.
//!
//! MFU bets that a heavily referenced page has already served its purpose
//! and evicts it first, the inverse of LFU. It does badly on stable working
//! sets, which is what makes it a useful baseline next to FIFO.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

use super::{AccessOutcome, AccessStats, ReplacementPolicy};
use crate::common::PageId;

/// Evicts the resident page with the highest lifetime access count.
///
/// Counts are kept for every page ever referenced, resident or not, and are
/// never reset on eviction. Pages inside the page range given at
/// construction are counted in a dense table indexed by page identifier;
/// any identifier outside it goes to a sparse map. Memory is therefore
/// bounded by the number of distinct pages, never by the trace length or
/// the size of an identifier.
///
/// Ties on the maximum count go to the lowest page identifier.
#[derive(Debug, Clone)]
pub struct MfuPolicy {
    capacity: usize,

    /// Ordered so that victim selection scans pages by ascending identifier.
    resident: BTreeSet<PageId>,

    /// `counts[p]` = accesses to page `p` so far, hits and faults alike.
    counts: Vec<u64>,

    /// Counts for identifiers at or beyond `counts.len()`.
    overflow: HashMap<PageId, u64>,

    stats: AccessStats,
}

impl MfuPolicy {
    /// Create an empty MFU engine.
    ///
    /// `page_range` sizes the dense count table; identifiers outside it are
    /// still accepted and counted sparsely.
    pub fn new(capacity: usize, page_range: u32) -> Self {
        Self {
            capacity,
            resident: BTreeSet::new(),
            counts: vec![0; page_range as usize],
            overflow: HashMap::new(),
            stats: AccessStats::new(),
        }
    }

    /// Lifetime access count of `page`.
    pub fn access_count(&self, page: PageId) -> u64 {
        match self.counts.get(page.index()) {
            Some(&count) => count,
            None => self.overflow.get(&page).copied().unwrap_or(0),
        }
    }

    fn bump(&mut self, page: PageId) {
        match self.counts.get_mut(page.index()) {
            Some(count) => *count += 1,
            None => *self.overflow.entry(page).or_insert(0) += 1,
        }
    }

    /// Highest count wins; among equals, the smallest identifier.
    fn select_victim(&self) -> Option<PageId> {
        self.resident
            .iter()
            .copied()
            .min_by_key(|&page| (Reverse(self.access_count(page)), page))
    }

    fn evict(&mut self) -> Option<PageId> {
        let victim = self.select_victim()?;
        self.resident.remove(&victim);
        self.stats.record_eviction();
        Some(victim)
    }
}

impl ReplacementPolicy for MfuPolicy {
    fn name(&self) -> &'static str {
        "MFU"
    }

    fn access(&mut self, page: PageId) -> AccessOutcome {
        // Counted before the hit check so the incoming page's own access
        // is included.
        self.bump(page);

        if self.resident.contains(&page) {
            self.stats.record_hit();
            return AccessOutcome::Hit;
        }

        self.stats.record_fault();
        let evicted = if self.resident.len() >= self.capacity {
            self.evict()
        } else {
            None
        };

        if self.resident.len() < self.capacity {
            self.resident.insert(page);
        }

        AccessOutcome::Fault { evicted }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn resident_count(&self) -> usize {
        self.resident.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    fn stats(&self) -> AccessStats {
        self.stats
    }
}
