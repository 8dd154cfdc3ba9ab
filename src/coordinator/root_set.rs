//! Bounded, lock-protected accumulator for discovered roots

use num_bigint::BigInt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Result of offering a root to the set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The set was already full; nothing was appended
    Rejected,
    /// The root was appended and the set is still below target
    Appended,
    /// The root was appended and filled the set to its target
    TargetReached,
}

/// Ordered collection of roots, bounded by the search target
///
/// The size check and the append happen under one lock, so concurrent
/// workers can never push the set past its target. Order reflects lock
/// acquisition order and is not deterministic across runs.
#[derive(Debug)]
pub struct RootSet {
    target: usize,
    roots: Mutex<Vec<BigInt>>,
}

impl RootSet {
    /// Create an empty set that accepts at most `target` roots
    pub fn new(target: usize) -> Self {
        Self {
            target,
            roots: Mutex::new(Vec::with_capacity(target)),
        }
    }

    /// Maximum number of roots this set accepts
    pub fn target(&self) -> usize {
        self.target
    }

    /// Append `root` if the set is still below target
    ///
    /// `on_append` runs while the lock is held, only when the root was
    /// accepted, and receives the outcome. Workers use it to emit trace
    /// lines and trigger cancellation before the lock is released.
    pub fn try_append_with<F>(&self, root: BigInt, on_append: F) -> AppendOutcome
    where
        F: FnOnce(AppendOutcome),
    {
        let mut roots = self.lock();
        if roots.len() >= self.target {
            return AppendOutcome::Rejected;
        }

        roots.push(root);
        let outcome = if roots.len() >= self.target {
            AppendOutcome::TargetReached
        } else {
            AppendOutcome::Appended
        };
        on_append(outcome);
        outcome
    }

    /// Append `root` if the set is still below target
    pub fn try_append(&self, root: BigInt) -> AppendOutcome {
        self.try_append_with(root, |_| {})
    }

    /// Number of roots collected so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no root has been collected yet
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether the set has reached its target
    pub fn is_full(&self) -> bool {
        self.lock().len() >= self.target
    }

    /// Consume the set and return its roots in append order
    pub fn into_roots(self) -> Vec<BigInt> {
        self.roots
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // A poisoned lock still guards a valid prefix of appended roots
    fn lock(&self) -> MutexGuard<'_, Vec<BigInt>> {
        self.roots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
