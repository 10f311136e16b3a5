//! Response Normaliser Port
//!
//! Defines the interface for reshaping a provider's raw payload into the
//! canonical result.

use crate::domain::entities::GeoLocation;
use serde_json::Value;

/// Pure mapping from a provider's raw parsed JSON to a [`GeoLocation`].
///
/// Implementations rename and reshape fields only; no I/O. For a fixed
/// input the output must be deterministic.
pub trait ResponseNormaliser: Send + Sync {
    /// Normalise one raw provider payload.
    fn normalise(&self, raw: &Value) -> GeoLocation;
}
