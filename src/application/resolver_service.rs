//! Resolver Service - Main application use case
//!
//! Orchestrates the ordered provider fallback chain: validate the input,
//! try each provider in turn, normalise the first clean payload. This is
//! the primary interface for callers.

use crate::domain::entities::GeoLocation;
use crate::domain::ports::{IpValidator, ProviderGateway, ResponseNormaliser, TransportError};
use crate::domain::value_objects::ProviderTemplate;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Built-in provider templates, tried after any caller-supplied ones.
const DEFAULT_PROVIDERS: &[&str] = &["https://ipapi.co/*/json/"];

/// Target for the resolver's diagnostic events, so they can be enabled
/// on their own (e.g. `RUST_LOG=iplocation=debug`).
const LOG_TARGET: &str = "iplocation";

/// Outcome of one provider attempt.
///
/// Soft failures (unparseable body, error-flagged payload) advance the
/// loop to the next provider; a hard failure aborts the whole call. The
/// two exits are deliberately distinct variants rather than error paths.
enum Attempt {
    Success(Value),
    Soft,
    Hard(TransportError),
}

/// Terminal outcome of a resolution call.
///
/// Exactly one of these (or a success) per call; per-provider soft
/// failures are never surfaced individually.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("invalid IP address")]
    InvalidIp,
    #[error("all providers failed")]
    AllProvidersFailed,
    #[error("provider request failed: {0}")]
    Transport(#[from] TransportError),
}

/// Resolver service - main application use case.
///
/// Owns the effective ordered provider list (caller templates first, then
/// the built-in defaults) and drives the fallback chain. The service holds
/// no mutable state, so concurrent `resolve` calls run independent chains.
pub struct ResolverService {
    providers: Vec<ProviderTemplate>,
    validator: Arc<dyn IpValidator>,
    normaliser: Arc<dyn ResponseNormaliser>,
    gateway: Arc<dyn ProviderGateway>,
}

impl ResolverService {
    /// Create a resolver over an explicit, full provider list.
    ///
    /// The list is used exactly as given; most callers want
    /// [`ResolverService::with_defaults`] instead, which appends the
    /// built-in providers.
    pub fn new(
        validator: Arc<dyn IpValidator>,
        normaliser: Arc<dyn ResponseNormaliser>,
        gateway: Arc<dyn ProviderGateway>,
        providers: Vec<ProviderTemplate>,
    ) -> Self {
        Self {
            providers,
            validator,
            normaliser,
            gateway,
        }
    }

    /// Create a resolver trying `extra_providers` (in the caller's order)
    /// before the built-in defaults.
    pub fn with_defaults(
        validator: Arc<dyn IpValidator>,
        normaliser: Arc<dyn ResponseNormaliser>,
        gateway: Arc<dyn ProviderGateway>,
        extra_providers: Vec<ProviderTemplate>,
    ) -> Self {
        let mut providers = extra_providers;
        providers.extend(default_providers());
        Self::new(validator, normaliser, gateway, providers)
    }

    /// The effective ordered provider list.
    pub fn providers(&self) -> &[ProviderTemplate] {
        &self.providers
    }

    /// Resolve `ip` to a geolocation record.
    ///
    /// Providers are attempted strictly one at a time, in order, each
    /// attempt completing (body parsed or transport failure observed)
    /// before the next begins. The first clean, error-free payload wins.
    pub async fn resolve(&self, ip: &str) -> Result<GeoLocation, ResolveError> {
        // Gate on "validator says invalid", not "validator says valid":
        // the port's polarity is inverted.
        if self.validator.is_invalid(ip) {
            return Err(ResolveError::InvalidIp);
        }

        for provider in &self.providers {
            let url = provider.fill(ip);
            debug!(target: LOG_TARGET, "trying: {url}");

            match self.attempt(&url).await {
                Attempt::Success(raw) => {
                    let location = self.normaliser.normalise(&raw);
                    debug!(target: LOG_TARGET, "returned: {location:?}");
                    return Ok(location);
                }
                Attempt::Soft => continue,
                Attempt::Hard(err) => return Err(ResolveError::Transport(err)),
            }
        }

        Err(ResolveError::AllProvidersFailed)
    }

    /// Completion-handler variant of [`ResolverService::resolve`].
    ///
    /// Delivers the identical outcome to `handler` instead of returning
    /// it; purely a calling-convention choice.
    pub async fn resolve_with<F>(&self, ip: &str, handler: F)
    where
        F: FnOnce(Result<GeoLocation, ResolveError>),
    {
        handler(self.resolve(ip).await);
    }

    /// One provider attempt: fetch, parse, inspect the error flag.
    async fn attempt(&self, url: &str) -> Attempt {
        let body = match self.gateway.fetch_body(url).await {
            Ok(body) => body,
            Err(err) => return Attempt::Hard(err),
        };
        debug!(target: LOG_TARGET, "got: {body}");

        let raw: Value = match serde_json::from_str(&body) {
            Ok(raw) => raw,
            Err(_) => return Attempt::Soft,
        };
        if is_truthy(raw.get("error")) {
            return Attempt::Soft;
        }
        Attempt::Success(raw)
    }
}

/// The built-in provider list as parsed templates.
fn default_providers() -> Vec<ProviderTemplate> {
    DEFAULT_PROVIDERS
        .iter()
        .map(|t| ProviderTemplate::parse(*t).expect("built-in provider template is well-formed"))
        .collect()
}

/// JS-style truthiness for the provider's `error` field: absent, null,
/// false, 0 and "" are falsy; everything else (including `{}` and `[]`)
/// flags the payload as a soft failure.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
