//! introots - concurrent integer root search for integer polynomials
//!
//! Given a polynomial with arbitrary-precision integer coefficients, a fixed
//! pool of workers scans the integers by magnitude and collects up to a
//! target number of distinct integer roots.
//!
//! # Architecture
//!
//! - **Polynomial**: big-integer coefficients, exact evaluation, CSV parsing, presets
//! - **Stride partition**: worker `i` of `w` owns magnitudes `i+1, i+1+w, ...`
//! - **Shared root set**: mutex-guarded, bounded by the target
//! - **Cooperative cancellation**: the worker that fills the set stops its peers
//! - **Stats**: per-worker evaluation counts and timings, text and JSON reports

pub mod config;
pub mod coordinator;
pub mod output;
pub mod polynomial;
pub mod runner;
pub mod stats;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use config::Config;
pub use coordinator::{find_integer_roots, SearchCoordinator, SearchOutcome};
pub use polynomial::{is_root, Polynomial};

/// Result type used throughout introots
pub type Result<T> = anyhow::Result<T>;
