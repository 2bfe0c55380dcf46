//! rdash-client: value fetching from the simulation webserver.
//!
//! One HTTP GET per variable, normalized at the boundary into a
//! `TypedValue` and memoized for slightly less than a poll interval so a
//! whole refresh cycle costs at most one request per distinct variable.

mod fetcher;
mod transport;

pub use fetcher::ValueFetcher;
pub use transport::{HttpTransport, TransportError, ValueTransport};
