//! Value fetcher: one variable in, one typed value out
//!
//! The fetcher is the recovery boundary of the whole dashboard. No
//! matter what the network or the upstream does, `fetch` returns a
//! `TypedValue`; errors travel as data and the refresh loop never sees
//! a panic or an `Err`.

use std::time::Duration;

use rdash_core::TtlCache;
use rdash_types::{classify, FetchError, TypedValue};

use crate::transport::{TransportError, ValueTransport};

/// Fetches and normalizes named variables, memoizing results.
///
/// The memoization TTL should sit slightly under the poll interval
/// (see `rdash_core::memo_ttl`), so that every widget reading the same
/// variable within one tick shares a single upstream request, while no
/// tick ever sees the previous tick's value.
pub struct ValueFetcher<T> {
    transport: T,
    cache: TtlCache<String, TypedValue>,
}

impl<T: ValueTransport> ValueFetcher<T> {
    pub fn new(transport: T, memo_ttl: Duration) -> Self {
        Self {
            transport,
            cache: TtlCache::new(memo_ttl),
        }
    }

    /// Fetch the current value of `variable`.
    ///
    /// Total: every input and every failure maps to exactly one
    /// `TypedValue`. Results, including errors, are memoized for the
    /// TTL window, matching the reference dashboard's cache behavior.
    pub async fn fetch(&self, variable: &str) -> TypedValue {
        if variable.trim().is_empty() {
            return TypedValue::Error(FetchError::invalid_input(variable));
        }

        if let Some(hit) = self.cache.get(variable) {
            log::trace!("memoized value for {variable}");
            return hit;
        }

        let value = match self.transport.get_raw(variable).await {
            Ok(raw) => classify(&raw),
            Err(error) => {
                log::debug!("fetch of {variable} failed: {error}");
                TypedValue::Error(map_transport_error(variable, error))
            }
        };

        self.cache.insert(variable.to_string(), value.clone());
        value
    }

    /// Drop all memoized values, forcing the next fetch of every
    /// variable to hit the upstream.
    pub fn invalidate(&self) {
        self.cache.clear();
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

fn map_transport_error(variable: &str, error: TransportError) -> FetchError {
    match error {
        TransportError::ConnectionRefused => FetchError::connection_refused(),
        TransportError::Timeout => FetchError::timeout(),
        TransportError::Status(404) => FetchError::not_found(variable),
        TransportError::Status(code) => FetchError::transport(format!("unexpected status {code}")),
        TransportError::Other(cause) => FetchError::transport(cause),
    }
}
