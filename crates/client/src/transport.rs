//! Transport layer for the upstream webserver
//!
//! The webserver exposes one endpoint: GET on the base URL with a
//! `Variable` query parameter, answering with the value as plain text.
//! The trait exists so the fetcher can be exercised against a stub
//! without a network.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

/// Network-level failure, before any value interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("connection refused")]
    ConnectionRefused,
    #[error("request timed out")]
    Timeout,
    /// Non-2xx response from the upstream
    #[error("unexpected status {0}")]
    Status(u16),
    /// DNS failures, resets, protocol errors
    #[error("{0}")]
    Other(String),
}

/// Raw access to one named variable's current value.
#[async_trait]
pub trait ValueTransport: Send + Sync {
    /// Fetch the raw response body for `variable`.
    async fn get_raw(&self, variable: &str) -> Result<String, TransportError>;
}

/// HTTP transport backed by a shared `reqwest` client.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport for `base_url` with a per-request `timeout`.
    ///
    /// The timeout must stay below the poll interval; a stalled request
    /// otherwise bleeds into the next refresh tick.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ValueTransport for HttpTransport {
    async fn get_raw(&self, variable: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("Variable", variable)])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response.text().await.map_err(map_reqwest_error)
    }
}

fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::ConnectionRefused
    } else {
        TransportError::Other(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        assert_eq!(TransportError::ConnectionRefused.to_string(), "connection refused");
        assert_eq!(TransportError::Timeout.to_string(), "request timed out");
        assert_eq!(TransportError::Status(404).to_string(), "unexpected status 404");
        assert_eq!(
            TransportError::Other("dns failure".into()).to_string(),
            "dns failure"
        );
    }

    #[test]
    fn test_http_transport_builds() {
        let transport =
            HttpTransport::new("http://localhost:8785/", Duration::from_secs(1)).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8785/");
    }
}
