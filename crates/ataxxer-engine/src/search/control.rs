//! Search control: the wall-clock deadline for one decision.

use std::time::{Duration, Instant};

/// Controls when a search should stop.
///
/// The deadline is fixed at construction and polled by the search at the
/// start of each depth, before each root candidate and on entry to every
/// recursive call. Nothing interrupts a branch between polls.
#[derive(Debug, Clone, Copy)]
pub struct SearchControl {
    start: Instant,
    deadline: Option<Instant>,
}

impl SearchControl {
    /// Create control without a time limit.
    pub fn new_infinite() -> Self {
        Self {
            start: Instant::now(),
            deadline: None,
        }
    }

    /// Create control that expires `budget` from now.
    pub fn new_timed(budget: Duration) -> Self {
        let start = Instant::now();
        Self {
            start,
            deadline: start.checked_add(budget),
        }
    }

    /// Return `true` once the deadline has passed.
    #[inline]
    pub fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Elapsed time since the control was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
