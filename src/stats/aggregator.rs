//! Statistics aggregation
//!
//! Merges per-worker statistics into a single aggregate view while keeping
//! the individual worker entries for the per-worker report.
//!
//! # Example
//!
//! ```
//! use introots::stats::{WorkerStats, aggregator::StatisticsAggregator};
//!
//! let mut worker1 = WorkerStats::new(0);
//! worker1.record_candidate();
//!
//! let mut worker2 = WorkerStats::new(1);
//! worker2.record_candidate();
//! worker2.record_root();
//!
//! let mut aggregator = StatisticsAggregator::new();
//! aggregator.add_worker(worker1);
//! aggregator.add_worker(worker2);
//!
//! let aggregate = aggregator.aggregate();
//! assert_eq!(aggregate.candidates_tested(), 2);
//! assert_eq!(aggregate.roots_found(), 1);
//! ```

use crate::stats::WorkerStats;
use std::collections::BTreeMap;

/// Statistics aggregator for the workers of one search
#[derive(Debug, Clone, Default)]
pub struct StatisticsAggregator {
    /// Per-worker statistics (worker_id → stats), ordered by id
    workers: BTreeMap<usize, WorkerStats>,
}

impl StatisticsAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add statistics from a worker, replacing any earlier entry for that id
    pub fn add_worker(&mut self, stats: WorkerStats) {
        self.workers.insert(stats.worker_id, stats);
    }

    /// Get the number of workers
    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }

    /// Aggregate statistics across all workers
    ///
    /// The aggregate's `worker_id` is meaningless and left at 0.
    pub fn aggregate(&self) -> WorkerStats {
        let mut aggregate = WorkerStats::new(0);
        for stats in self.workers.values() {
            aggregate.merge(stats);
        }
        aggregate
    }

    /// Per-worker statistics in ascending worker id order
    pub fn per_worker(&self) -> Vec<WorkerStats> {
        self.workers.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn stats(id: usize, candidates: u64, roots: u64, millis: u64) -> WorkerStats {
        WorkerStats {
            worker_id: id,
            candidates_tested: candidates,
            roots_found: roots,
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn test_empty() {
        let aggregator = StatisticsAggregator::new();
        assert_eq!(aggregator.num_workers(), 0);
        assert_eq!(aggregator.aggregate().candidates_tested(), 0);
    }

    #[test]
    fn test_aggregate() {
        let mut aggregator = StatisticsAggregator::new();
        aggregator.add_worker(stats(1, 40, 1, 15));
        aggregator.add_worker(stats(0, 60, 2, 10));

        let aggregate = aggregator.aggregate();
        assert_eq!(aggregate.candidates_tested(), 100);
        assert_eq!(aggregate.roots_found(), 3);
        assert_eq!(aggregate.elapsed(), Duration::from_millis(15));
    }

    #[test]
    fn test_per_worker_sorted() {
        let mut aggregator = StatisticsAggregator::new();
        for id in [3, 0, 2, 1] {
            aggregator.add_worker(stats(id, 1, 0, 1));
        }

        let ids: Vec<usize> = aggregator.per_worker().iter().map(|s| s.worker_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }
}
