//! Concurrent search coordinator
//!
//! Owns the polynomial, the shared root set and the cancellation token for
//! one search, fans out a fixed pool of workers over the stride partition,
//! and joins them all before returning.
//!
//! The search is unbounded. If the polynomial has fewer distinct integer
//! roots than the target, no worker ever sets the token and `run` blocks
//! until someone else cancels it through `cancellation_token()`.
//!
//! # Example
//!
//! ```
//! use introots::coordinator::SearchCoordinator;
//! use introots::polynomial::Polynomial;
//! use num_bigint::BigInt;
//!
//! let poly = Polynomial::from_i64(&[1, -6, 11, -6])?;
//! let outcome = SearchCoordinator::new(poly, 3, 4)?.run()?;
//!
//! let mut roots = outcome.roots.clone();
//! roots.sort();
//! assert_eq!(roots, vec![BigInt::from(1), BigInt::from(2), BigInt::from(3)]);
//! assert!(outcome.completed);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod cancel;
mod root_set;

pub use cancel::CancellationToken;
pub use root_set::{AppendOutcome, RootSet};

use crate::polynomial::Polynomial;
use crate::stats::aggregator::StatisticsAggregator;
use crate::worker::lane::StrideLane;
use crate::worker::Worker;
use crate::Result;
use num_bigint::BigInt;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Invalid search parameters, rejected before any worker starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("target root count must be at least 1")]
    ZeroTarget,

    #[error("worker count must be at least 1")]
    ZeroWorkers,
}

/// Result of one search invocation
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Roots in the order they were appended
    pub roots: Vec<BigInt>,
    /// Number of roots the search was asked to collect
    pub target: usize,
    /// Number of workers that ran
    pub workers: usize,
    /// Whether the target was reached (false after an external cancellation)
    pub completed: bool,
    /// Wall-clock time from launch to join
    pub elapsed: Duration,
    /// Per-worker statistics
    pub stats: StatisticsAggregator,
}

impl SearchOutcome {
    /// Roots in ascending order
    pub fn sorted_roots(&self) -> Vec<BigInt> {
        let mut roots = self.roots.clone();
        roots.sort();
        roots
    }
}

/// Drives one search from fan-out to join
#[derive(Debug)]
pub struct SearchCoordinator {
    polynomial: Polynomial,
    workers: usize,
    trace: bool,
    roots: RootSet,
    token: CancellationToken,
}

impl SearchCoordinator {
    /// Prepare a search for `target` roots using `workers` workers
    pub fn new(polynomial: Polynomial, target: usize, workers: usize) -> std::result::Result<Self, SearchError> {
        if target == 0 {
            return Err(SearchError::ZeroTarget);
        }
        if workers == 0 {
            return Err(SearchError::ZeroWorkers);
        }

        Ok(Self {
            polynomial,
            workers,
            trace: false,
            roots: RootSet::new(target),
            token: CancellationToken::new(),
        })
    }

    /// Enable per-worker trace lines
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Handle to this search's cancellation token
    ///
    /// Cancelling it makes every worker stop at its next check; the roots
    /// collected so far are still returned by `run`.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    pub fn target(&self) -> usize {
        self.roots.target()
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Launch all workers, wait for every one of them, and collect the roots
    ///
    /// Blocks until the target is reached or the token is cancelled
    /// externally. A panicking worker cancels the search and is reported as
    /// an error.
    pub fn run(self) -> Result<SearchOutcome> {
        let target = self.target();
        debug!(
            degree = self.polynomial.degree(),
            target,
            workers = self.workers,
            "starting search"
        );

        let started = Instant::now();
        let lanes: Vec<StrideLane> = (0..self.workers)
            .filter_map(|id| StrideLane::new(id, self.workers))
            .collect();

        let polynomial = &self.polynomial;
        let roots = &self.roots;
        let token = &self.token;
        let trace = self.trace;

        let joined = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = lanes
                .into_iter()
                .map(|lane| {
                    scope.spawn(move |_| {
                        let _guard = CancelOnPanic(token);
                        Worker::new(lane, polynomial, roots, token)
                            .with_trace(trace)
                            .run()
                    })
                })
                .collect();

            handles
                .into_iter()
                .enumerate()
                .map(|(id, handle)| {
                    handle
                        .join()
                        .map_err(|_| anyhow::anyhow!("Worker thread {} panicked", id))
                })
                .collect::<Vec<_>>()
        })
        .map_err(|_| anyhow::anyhow!("Worker thread panicked"))?;

        let elapsed = started.elapsed();
        let mut stats = StatisticsAggregator::new();
        for worker_stats in joined {
            stats.add_worker(worker_stats?);
        }

        let completed = self.roots.is_full();
        debug!(
            found = self.roots.len(),
            completed,
            elapsed_ms = elapsed.as_millis() as u64,
            "search finished"
        );
        let roots = self.roots.into_roots();

        Ok(SearchOutcome {
            roots,
            target,
            workers: self.workers,
            completed,
            elapsed,
            stats,
        })
    }
}

/// Cancels the search if a worker unwinds, so its peers do not spin forever
struct CancelOnPanic<'a>(&'a CancellationToken);

impl Drop for CancelOnPanic<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.0.cancel();
        }
    }
}

/// Find `target` distinct integer roots of `polynomial` using `workers` workers
///
/// Blocks forever when the polynomial has fewer than `target` integer roots
/// reachable by the search; use `SearchCoordinator` directly to keep a
/// cancellation handle.
pub fn find_integer_roots(
    polynomial: Polynomial,
    target: usize,
    workers: usize,
    trace: bool,
) -> Result<Vec<BigInt>> {
    let outcome = SearchCoordinator::new(polynomial, target, workers)?
        .with_trace(trace)
        .run()?;
    Ok(outcome.roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::presets::Preset;
    use std::collections::HashSet;
    use std::thread;

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    fn bigs(values: &[i64]) -> Vec<BigInt> {
        values.iter().copied().map(BigInt::from).collect()
    }

    /// (x-1)(x-2)(x-3)(x-4)(x-5)(x-6)
    fn six_roots() -> Polynomial {
        Polynomial::from_i64(&[1, -21, 175, -735, 1624, -1764, 720]).unwrap()
    }

    #[test]
    fn test_cubic_with_four_workers() {
        let poly = Polynomial::from_i64(&[1, -6, 11, -6]).unwrap();
        let mut roots = find_integer_roots(poly, 3, 4, false).unwrap();
        roots.sort();
        assert_eq!(roots, bigs(&[1, 2, 3]));
    }

    #[test]
    fn test_negative_and_positive_roots() {
        // (x + 2)(x - 3)(x + 7)
        let poly = Polynomial::from_i64(&[1, 6, -13, -42]).unwrap();
        let outcome = SearchCoordinator::new(poly, 3, 3).unwrap().run().unwrap();
        assert!(outcome.completed);
        assert_eq!(outcome.sorted_roots(), bigs(&[-7, -2, 3]));
    }

    #[test]
    fn test_bound_holds_under_contention() {
        let all_roots: HashSet<BigInt> = (1..=6).map(BigInt::from).collect();

        for workers in [1usize, 2, 8, 64] {
            for _ in 0..5 {
                let outcome = SearchCoordinator::new(six_roots(), 3, workers)
                    .unwrap()
                    .run()
                    .unwrap();

                assert_eq!(outcome.roots.len(), 3, "{} workers overshot", workers);
                let distinct: HashSet<BigInt> = outcome.roots.iter().cloned().collect();
                assert_eq!(distinct.len(), 3, "duplicate root with {} workers", workers);
                assert!(distinct.is_subset(&all_roots));
                assert!(outcome.completed);
                assert_eq!(outcome.stats.num_workers(), workers);
                assert_eq!(outcome.stats.aggregate().roots_found(), 3);
            }
        }
    }

    #[test]
    fn test_set_is_deterministic_across_runs() {
        for workers in [1usize, 2, 5] {
            let outcome = SearchCoordinator::new(six_roots(), 6, workers)
                .unwrap()
                .run()
                .unwrap();
            assert_eq!(outcome.sorted_roots(), bigs(&[1, 2, 3, 4, 5, 6]));
        }
    }

    #[test]
    fn test_more_workers_than_roots() {
        let poly = Polynomial::from_i64(&[1, -1]).unwrap();
        let outcome = SearchCoordinator::new(poly, 1, 16).unwrap().run().unwrap();
        assert_eq!(outcome.roots, vec![big(1)]);
        assert_eq!(outcome.workers, 16);
    }

    #[test]
    fn test_preset_p1_terminates() {
        let poly = Preset::P1.polynomial();
        let target = poly.max_roots();
        let outcome = SearchCoordinator::new(poly, target, 4).unwrap().run().unwrap();
        assert_eq!(outcome.sorted_roots(), bigs(&[1000, 2000, 3000]));
    }

    #[test]
    fn test_accessors() {
        let poly = Polynomial::from_i64(&[1, -3, 2]).unwrap();
        let coordinator = SearchCoordinator::new(poly.clone(), 2, 5).unwrap();
        assert_eq!(coordinator.polynomial(), &poly);
        assert_eq!(coordinator.target(), 2);
        assert_eq!(coordinator.workers(), 5);
    }

    #[test]
    fn test_trace_search_completes() {
        let poly = Polynomial::from_i64(&[1, -6, 11, -6]).unwrap();
        for workers in [1usize, 3, 8] {
            let outcome = SearchCoordinator::new(poly.clone(), 3, workers)
                .unwrap()
                .with_trace(true)
                .run()
                .unwrap();
            assert!(outcome.completed);
            assert_eq!(outcome.sorted_roots(), bigs(&[1, 2, 3]));
        }
    }

    #[test]
    fn test_rejects_zero_target_and_workers() {
        let poly = Polynomial::from_i64(&[1, -1]).unwrap();
        assert_eq!(
            SearchCoordinator::new(poly.clone(), 0, 4).unwrap_err(),
            SearchError::ZeroTarget
        );
        assert_eq!(
            SearchCoordinator::new(poly, 1, 0).unwrap_err(),
            SearchError::ZeroWorkers
        );
    }

    #[test]
    fn test_no_integer_roots_does_not_terminate() {
        let poly = Polynomial::from_i64(&[1, 0, 1]).unwrap();
        let coordinator = SearchCoordinator::new(poly, 2, 4).unwrap();
        let token = coordinator.cancellation_token();

        let handle = thread::spawn(move || coordinator.run());
        thread::sleep(Duration::from_secs(2));
        assert!(!handle.is_finished(), "x^2 + 1 search must not finish on its own");

        token.cancel();
        let outcome = handle.join().unwrap().unwrap();
        assert!(!outcome.completed);
        assert!(outcome.roots.is_empty());
        assert!(outcome.stats.aggregate().candidates_tested() > 0);
    }

    #[test]
    fn test_partial_roots_are_valid_after_cancellation() {
        // (x - 1)(x - 2)(x^2 + 1): degree 4, only two integer roots
        let poly = Polynomial::from_i64(&[1, -3, 3, -3, 2]).unwrap();
        let check = poly.clone();
        let coordinator = SearchCoordinator::new(poly, 4, 3).unwrap();
        let token = coordinator.cancellation_token();

        let handle = thread::spawn(move || coordinator.run());
        thread::sleep(Duration::from_millis(500));
        assert!(!handle.is_finished());

        token.cancel();
        let outcome = handle.join().unwrap().unwrap();
        assert!(!outcome.completed);
        for root in &outcome.roots {
            assert!(check.is_root(root), "{} is not a root", root);
        }
        assert_eq!(outcome.sorted_roots(), bigs(&[1, 2]));
    }

    #[test]
    fn test_cancelled_before_run() {
        let poly = Polynomial::from_i64(&[1, -1]).unwrap();
        let coordinator = SearchCoordinator::new(poly, 1, 4).unwrap();
        coordinator.cancellation_token().cancel();

        let outcome = coordinator.run().unwrap();
        assert!(!outcome.completed);
        assert!(outcome.roots.is_empty());
        assert_eq!(outcome.stats.aggregate().candidates_tested(), 0);
    }
}
