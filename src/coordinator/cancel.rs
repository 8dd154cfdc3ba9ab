//! Cooperative cancellation signal shared by all workers of one search

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle to a search's stop flag
///
/// Set once, observed forever after: there is no way to reset a token.
/// Workers poll it before each candidate; an evaluation already in flight
/// is allowed to finish.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new, unset token
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal every holder of this token to stop
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Check whether the token has been cancelled
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_cancel_is_sticky() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_clones_share_state() {
        let token = CancellationToken::new();
        let clone = token.clone();

        let handle = thread::spawn(move || clone.cancel());
        handle.join().unwrap();

        assert!(token.is_cancelled());
    }
}
