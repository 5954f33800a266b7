//! Time management: turn a referee timeout into a search budget.

use std::time::Duration;

/// Slack kept back from the referee timeout for transmitting the reply.
pub const MOVE_OVERHEAD: Duration = Duration::from_millis(100);

/// Smallest budget handed to a search.
pub const MIN_BUDGET: Duration = Duration::from_millis(1);

/// Compute the budget for one decision.
///
/// Without a timeout the configured budget is used as-is. With one, the
/// budget is the smaller of the configured budget and the timeout minus
/// [`MOVE_OVERHEAD`]. The result is never below [`MIN_BUDGET`].
///
/// | configured | timeout | budget |
/// |------------|---------|--------|
/// | 2.9 s      | none    | 2.9 s  |
/// | 2.9 s      | 3 s     | 2.9 s  |
/// | 2.9 s      | 1 s     | 0.9 s  |
/// | 2.9 s      | 50 ms   | 1 ms   |
pub fn budget_for_turn(configured: Duration, timeout: Option<Duration>) -> Duration {
    let budget = match timeout {
        Some(t) => configured.min(t.saturating_sub(MOVE_OVERHEAD)),
        None => configured,
    };
    budget.max(MIN_BUDGET)
}
