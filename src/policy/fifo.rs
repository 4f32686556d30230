//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use super::{AccessOutcome, AccessStats, ReplacementPolicy};
use crate::common::PageId;

/// Evicts resident pages in the order they were admitted.
///
/// A hit does not move the page in the queue: the victim is the least
/// recently *inserted* page, not the least recently used one. That makes
/// FIFO susceptible to Bélády's anomaly, where adding frames adds faults.
#[derive(Debug, Clone)]
pub struct FifoPolicy {
    capacity: usize,

    /// Resident pages in admission order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check. Always holds exactly the queue's pages.
    resident: HashSet<PageId>,

    stats: AccessStats,
}

impl FifoPolicy {
    /// Create an empty FIFO engine with `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::new(),
            resident: HashSet::new(),
            stats: AccessStats::new(),
        }
    }

    /// Resident pages from oldest to newest admission.
    pub fn admission_order(&self) -> impl Iterator<Item = PageId> + '_ {
        self.queue.iter().copied()
    }

    fn evict(&mut self) -> Option<PageId> {
        let victim = self.queue.pop_front()?;
        self.resident.remove(&victim);
        self.stats.record_eviction();
        Some(victim)
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn access(&mut self, page: PageId) -> AccessOutcome {
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

        // Zero frames: nothing to evict and nowhere to put the page.
        if self.resident.len() < self.capacity {
            self.queue.push_back(page);
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

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(policy: &mut FifoPolicy, pages: &[u32]) {
        for &p in pages {
            policy.access(PageId::new(p));
        }
    }

    #[test]
    fn test_fifo_basic() {
        let mut policy = FifoPolicy::new(3);

        assert_eq!(policy.access(PageId::new(0)), AccessOutcome::Fault { evicted: None });
        assert_eq!(policy.access(PageId::new(1)), AccessOutcome::Fault { evicted: None });
        assert_eq!(policy.access(PageId::new(2)), AccessOutcome::Fault { evicted: None });
        assert_eq!(policy.resident_count(), 3);

        // Should evict in FIFO order
        assert_eq!(
            policy.access(PageId::new(3)),
            AccessOutcome::Fault { evicted: Some(PageId::new(0)) }
        );
        assert_eq!(
            policy.access(PageId::new(4)),
            AccessOutcome::Fault { evicted: Some(PageId::new(1)) }
        );
        assert_eq!(policy.resident_count(), 3);
        assert_eq!(policy.stats().evictions, 2);
    }

    #[test]
    fn test_fifo_hit_does_not_reorder() {
        let mut policy = FifoPolicy::new(2);

        feed(&mut policy, &[0, 1]);
        assert_eq!(policy.access(PageId::new(0)), AccessOutcome::Hit);

        // Page 0 was admitted first, so it goes first despite the recent hit.
        assert_eq!(
            policy.access(PageId::new(2)),
            AccessOutcome::Fault { evicted: Some(PageId::new(0)) }
        );
        let order: Vec<_> = policy.admission_order().collect();
        assert_eq!(order, vec![PageId::new(1), PageId::new(2)]);
    }

    #[test]
    fn test_fifo_capacity_one() {
        let mut policy = FifoPolicy::new(1);

        feed(&mut policy, &[1, 1, 2, 2]);

        assert_eq!(policy.fault_count(), 2);
        assert_eq!(policy.hit_count(), 2);
        assert!(policy.contains(PageId::new(2)));
        assert!(!policy.contains(PageId::new(1)));
    }

    #[test]
    fn test_fifo_zero_capacity_always_faults() {
        let mut policy = FifoPolicy::new(0);

        feed(&mut policy, &[4, 4, 4]);

        assert_eq!(policy.fault_count(), 3);
        assert_eq!(policy.hit_count(), 0);
        assert_eq!(policy.resident_count(), 0);
        assert_eq!(policy.stats().evictions, 0);
    }

    #[test]
    fn test_fifo_huge_capacity_short_trace() {
        let mut policy = FifoPolicy::new(1 << 40);

        feed(&mut policy, &[1, 2, 1]);

        assert_eq!(policy.fault_count(), 2);
        assert_eq!(policy.hit_count(), 1);
        assert_eq!(policy.resident_count(), 2);
    }

    #[test]
    fn test_fifo_reference_string() {
        let mut policy = FifoPolicy::new(3);

        feed(&mut policy, &[1, 2, 3, 4, 1, 2, 5, 1, 2, 3]);

        assert_eq!(policy.fault_count(), 8);
        assert_eq!(policy.hit_count(), 2);
        let order: Vec<_> = policy.admission_order().map(|p| p.0).collect();
        assert_eq!(order, vec![2, 5, 3]);
    }

    #[test]
    fn test_fifo_queue_matches_resident_set() {
        let mut policy = FifoPolicy::new(3);

        feed(&mut policy, &[5, 1, 5, 7, 2, 1, 9, 9, 0]);

        assert_eq!(policy.admission_order().count(), policy.resident_count());
        assert!(policy.admission_order().all(|p| policy.contains(p)));
    }
}
