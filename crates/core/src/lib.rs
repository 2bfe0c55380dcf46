//! rdash-core: Delta tracking, TTL memoization and sample history.
//!
//! This crate contains the stateful heart of the dashboard: the
//! per-variable delta-tracking cache, the generic TTL memoization
//! utility that keeps one refresh cycle from re-fetching the same
//! variable, and the bounded history buffers behind time-series views.

pub mod constants;
mod delta;
mod history;
mod ttl_cache;

pub use constants::{
    memo_ttl, DEFAULT_HISTORY_POINTS, DEFAULT_POLL_INTERVAL, DEFAULT_REQUEST_TIMEOUT,
    MEMO_TTL_FACTOR,
};
pub use delta::{DeltaTracker, Observation};
pub use history::{HistoryBuffer, Sample};
pub use ttl_cache::TtlCache;
