//! Provider Gateway Port
//!
//! Defines the interface for fetching one provider URL over the network.

use async_trait::async_trait;

/// Outbound port for a single provider request.
///
/// Implementations issue one GET and hand back the full response body as
/// text. Whether the body is parseable is not the gateway's concern; only
/// errors in issuing or completing the request itself surface here, and
/// those abort the whole resolution rather than falling through.
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    /// Fetch the response body for `url`, or fail with a transport error.
    async fn fetch_body(&self, url: &str) -> Result<String, TransportError>;
}

/// Error issuing or completing an HTTP request.
///
/// Carries the underlying cause when one exists; tests can construct one
/// from a bare message without a live socket.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Create a transport error from a message alone.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// The human-readable error detail.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
