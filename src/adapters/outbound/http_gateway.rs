//! HTTP Provider Gateway
//!
//! Implements ProviderGateway with a reqwest client carrying the fixed
//! request policy.

use crate::domain::ports::{ProviderGateway, TransportError};
use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::redirect::Policy;
use std::time::Duration;

/// reqwest-backed provider gateway.
///
/// The request policy is fixed and non-configurable: plain GET, redirects
/// followed, no referer header, `Cache-Control: no-cache`, and nothing
/// else — no credentials, no custom headers. This keeps caller context out
/// of third-party geolocation services and avoids stale cached answers.
/// Response status is deliberately not inspected; an error page's body is
/// simply an unparseable payload to the caller.
pub struct HttpProviderGateway {
    client: reqwest::Client,
}

impl HttpProviderGateway {
    /// Build a gateway with no request deadline.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_timeout(None)
    }

    /// Build a gateway with an optional per-request deadline.
    ///
    /// The deadline is a caller-side concern layered on the transport; the
    /// resolution contract itself defines no timeout.
    pub fn with_timeout(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder()
            .referer(false)
            .redirect(Policy::limited(10));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl ProviderGateway for HttpProviderGateway {
    async fn fetch_body(&self, url: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;
        let body = response.text().await?;
        Ok(body)
    }
}
