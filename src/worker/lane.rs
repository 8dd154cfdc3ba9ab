//! Stride partition of the positive integers
//!
//! With `w` workers, worker `id` owns the magnitudes `id+1, id+1+w,
//! id+1+2w, ...`. The lanes of workers `0..w` are disjoint and together
//! cover every positive integer exactly once, so no two workers ever test
//! the same candidate.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// One worker's lane in the stride partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrideLane {
    worker_id: usize,
    stride: usize,
}

impl StrideLane {
    /// Lane for `worker_id` out of `stride` workers
    ///
    /// Returns `None` when `stride` is zero or `worker_id` is not below it.
    pub fn new(worker_id: usize, stride: usize) -> Option<Self> {
        if stride == 0 || worker_id >= stride {
            return None;
        }
        Some(Self { worker_id, stride })
    }

    pub fn worker_id(&self) -> usize {
        self.worker_id
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// First magnitude in the lane
    pub fn start(&self) -> usize {
        self.worker_id + 1
    }

    /// The first `count` magnitudes of the lane
    pub fn preview(&self, count: usize) -> Vec<BigInt> {
        self.magnitudes().take(count).collect()
    }

    /// Whether `n` belongs to this lane
    pub fn contains(&self, n: &BigInt) -> bool {
        if !n.is_positive() {
            return false;
        }
        let offset: BigInt = n - BigInt::one();
        let remainder = offset % BigInt::from(self.stride);
        remainder == BigInt::from(self.worker_id)
    }

    /// Unbounded iterator over the lane's magnitudes, in increasing order
    pub fn magnitudes(&self) -> Magnitudes {
        Magnitudes {
            next: BigInt::from(self.start()),
            stride: BigInt::from(self.stride),
        }
    }
}

/// Iterator over a lane's magnitudes
///
/// Never returns `None`: the search domain is unbounded.
#[derive(Debug, Clone)]
pub struct Magnitudes {
    next: BigInt,
    stride: BigInt,
}

impl Iterator for Magnitudes {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        let advanced = &self.next + &self.stride;
        Some(std::mem::replace(&mut self.next, advanced))
    }
}

/// Render a candidate with an explicit sign (`+3`, `-3`)
pub fn signed(candidate: &BigInt) -> String {
    if candidate.is_negative() || candidate.is_zero() {
        candidate.to_string()
    } else {
        format!("+{}", candidate)
    }
}
