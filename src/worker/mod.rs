//! Search worker
//!
//! A worker walks its stride lane, testing `+n` then `-n` for every
//! magnitude `n` it owns, until the shared cancellation token is set.
//!
//! # Loop
//!
//! 1. Check the cancellation token; stop if set.
//! 2. Evaluate `+n`. On a root, offer it to the shared `RootSet`. If that
//!    append fills the set, cancel the token while still holding the lock
//!    and return.
//! 3. Same for `-n`.
//! 4. Advance `n` by the stride and repeat.
//!
//! The polynomial is borrowed read-only; the root set and the token are the
//! only shared mutable state.

pub mod lane;

use crate::coordinator::{AppendOutcome, CancellationToken, RootSet};
use crate::polynomial::{is_root, Polynomial};
use crate::stats::WorkerStats;
use lane::{signed, StrideLane};
use num_bigint::BigInt;
use std::time::Instant;
use tracing::{debug, info};

/// Number of lane entries shown in the start-of-lane trace line
const TRACE_PREVIEW: usize = 3;

/// Worker thread state for one search
///
/// Stateless across iterations except for the lane cursor; everything else
/// is borrowed from the coordinator for the duration of the search.
pub struct Worker<'a> {
    lane: StrideLane,
    polynomial: &'a Polynomial,
    roots: &'a RootSet,
    token: &'a CancellationToken,
    trace: bool,
    stats: WorkerStats,
}

impl<'a> Worker<'a> {
    /// Create a worker for `lane`
    pub fn new(
        lane: StrideLane,
        polynomial: &'a Polynomial,
        roots: &'a RootSet,
        token: &'a CancellationToken,
    ) -> Self {
        Self {
            lane,
            polynomial,
            roots,
            token,
            trace: false,
            stats: WorkerStats::new(lane.worker_id()),
        }
    }

    /// Emit per-worker trace lines (lane start, roots, target reached)
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Worker ID
    pub fn id(&self) -> usize {
        self.lane.worker_id()
    }

    /// Run until cancelled and return this worker's statistics
    pub fn run(mut self) -> WorkerStats {
        let started = Instant::now();

        if self.trace {
            let preview: Vec<String> = self
                .lane
                .preview(TRACE_PREVIEW)
                .iter()
                .map(|n| n.to_string())
                .collect();
            info!(
                worker = self.id(),
                "lane start: n={}, ... (stride={})",
                preview.join(", "),
                self.lane.stride()
            );
        }

        for n in self.lane.magnitudes() {
            if self.token.is_cancelled() {
                break;
            }
            if self.test_candidate(&n) {
                break;
            }
            if self.test_candidate(&-n) {
                break;
            }
        }

        self.stats.set_elapsed(started.elapsed());
        debug!(
            worker = self.id(),
            candidates = self.stats.candidates_tested(),
            roots = self.stats.roots_found(),
            "worker stopped"
        );
        self.stats
    }

    /// Evaluate one candidate; returns true when this worker filled the set
    fn test_candidate(&mut self, candidate: &BigInt) -> bool {
        self.stats.record_candidate();
        if !is_root(self.polynomial.coefficients(), candidate) {
            return false;
        }

        let id = self.id();
        let trace = self.trace;
        let token = self.token;
        let outcome = self.roots.try_append_with(candidate.clone(), |outcome| {
            if trace {
                info!(worker = id, "root found at {}", signed(candidate));
            }
            if outcome == AppendOutcome::TargetReached {
                if trace {
                    info!(worker = id, "target reached, stopping workers");
                }
                token.cancel();
            }
        });

        match outcome {
            AppendOutcome::Rejected => false,
            AppendOutcome::Appended => {
                self.stats.record_root();
                false
            }
            AppendOutcome::TargetReached => {
                self.stats.record_root();
                true
            }
        }
    }
}
