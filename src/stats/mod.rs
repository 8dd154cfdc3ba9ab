//! Search statistics
//!
//! Each worker owns a `WorkerStats` for the duration of its loop and hands
//! it back when it exits, so recording needs no synchronization. The
//! coordinator merges them with the `aggregator` after the join.
//!
//! # Example
//!
//! ```
//! use introots::stats::WorkerStats;
//!
//! let mut stats = WorkerStats::new(0);
//! stats.record_candidate();
//! stats.record_candidate();
//! stats.record_root();
//!
//! assert_eq!(stats.candidates_tested(), 2);
//! assert_eq!(stats.roots_found(), 1);
//! ```

pub mod aggregator;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-worker counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerStats {
    /// Worker ID (lane index)
    pub worker_id: usize,
    /// Number of polynomial evaluations (two per magnitude: +n and -n)
    pub candidates_tested: u64,
    /// Number of roots this worker appended to the shared set
    pub roots_found: u64,
    /// Wall-clock time the worker spent in its loop
    #[serde(with = "duration_micros")]
    pub elapsed: Duration,
}

impl WorkerStats {
    /// Create empty statistics for a worker
    pub fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            ..Default::default()
        }
    }

    /// Record one polynomial evaluation
    #[inline]
    pub fn record_candidate(&mut self) {
        self.candidates_tested += 1;
    }

    /// Record a root accepted into the shared set
    #[inline]
    pub fn record_root(&mut self) {
        self.roots_found += 1;
    }

    /// Record how long the worker ran
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    pub fn candidates_tested(&self) -> u64 {
        self.candidates_tested
    }

    pub fn roots_found(&self) -> u64 {
        self.roots_found
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Merge another worker's counters into this one
    ///
    /// Counters add up; elapsed time keeps the longest-running worker, since
    /// workers run concurrently.
    pub fn merge(&mut self, other: &WorkerStats) {
        self.candidates_tested += other.candidates_tested;
        self.roots_found += other.roots_found;
        self.elapsed = self.elapsed.max(other.elapsed);
    }
}

mod duration_micros {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_micros() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_micros(u64::deserialize(d)?))
    }
}
