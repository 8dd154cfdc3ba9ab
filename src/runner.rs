//! Runs the searches described by a validated configuration
//!
//! The coordinator never times itself out. When a deadline is configured,
//! this layer arms a watchdog thread that cancels the search through its
//! token; the watchdog is released early as soon as the search joins.

use crate::config::validator::ResolvedSearch;
use crate::coordinator::{SearchCoordinator, SearchOutcome};
use crate::Result;
use crossbeam::channel::{bounded, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Run one search per configured worker count, in order
pub fn run_all(search: &ResolvedSearch) -> Result<Vec<SearchOutcome>> {
    search
        .worker_counts
        .iter()
        .map(|&workers| run_search(search, workers))
        .collect()
}

/// Run a single search with `workers` workers
pub fn run_search(search: &ResolvedSearch, workers: usize) -> Result<SearchOutcome> {
    let coordinator = SearchCoordinator::new(search.polynomial.clone(), search.target, workers)?
        .with_trace(search.trace);
    run_with_deadline(coordinator, search.timeout)
}

/// Run `coordinator`, cancelling it if `deadline` expires first
pub fn run_with_deadline(
    coordinator: SearchCoordinator,
    deadline: Option<Duration>,
) -> Result<SearchOutcome> {
    let deadline = match deadline {
        Some(d) => d,
        None => return coordinator.run(),
    };

    debug!(
        degree = coordinator.polynomial().degree(),
        workers = coordinator.workers(),
        deadline_ms = deadline.as_millis() as u64,
        "arming search deadline"
    );
    let token = coordinator.cancellation_token();
    let (done_tx, done_rx) = bounded::<()>(1);

    let watchdog = thread::spawn(move || match done_rx.recv_timeout(deadline) {
        Err(RecvTimeoutError::Timeout) => {
            warn!(
                "deadline of {:?} expired, cancelling search",
                deadline
            );
            token.cancel();
            true
        }
        _ => false,
    });

    let outcome = coordinator.run();

    // Disconnecting wakes the watchdog if it is still waiting
    drop(done_tx);
    let expired = watchdog
        .join()
        .map_err(|_| anyhow::anyhow!("Deadline watchdog panicked"))?;
    debug!(expired, "deadline watchdog released");

    outcome
}
