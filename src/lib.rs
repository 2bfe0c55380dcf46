//! rdash: a polling dashboard core for reactor simulation telemetry.
//!
//! This library wires the workspace crates together:
//! - Typed values and the variable registry (`rdash-types`)
//! - Delta tracking, TTL memoization and history (`rdash-core`)
//! - The HTTP value fetcher (`rdash-client`)
//! - Configuration, text rendering and the poll loop (here)

pub mod config;
pub mod display;
pub mod poll;

// Re-export commonly used types
pub use config::AppConfig;
pub use poll::PollLoop;
pub use rdash_client::{HttpTransport, ValueFetcher, ValueTransport};
pub use rdash_core::{DeltaTracker, HistoryBuffer, Observation, TtlCache};
pub use rdash_types::{classify, FetchError, FetchErrorKind, TypedValue};
