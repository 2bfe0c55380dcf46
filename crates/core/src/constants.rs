//! Shared constants for the dashboard core

use std::time::Duration;

/// Default interval between refresh ticks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Per-request timeout for upstream fetches.
/// Must stay strictly below the poll interval so a stalled request
/// cannot overlap the next tick.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(1);

/// Fraction of the poll interval used as the memoization TTL.
/// Slightly under 1.0 so cached values expire before the next tick
/// re-reads them.
pub const MEMO_TTL_FACTOR: f64 = 0.9;

/// Number of samples kept per variable for time-series views
pub const DEFAULT_HISTORY_POINTS: usize = 30;

/// Memoization TTL for a given poll interval.
pub fn memo_ttl(poll_interval: Duration) -> Duration {
    poll_interval.mul_f64(MEMO_TTL_FACTOR)
}
