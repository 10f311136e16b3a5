//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the resolver domain.
//! They have no external dependencies and contain only business logic.

use serde::{Deserialize, Serialize};

/// Normalised geolocation record for a single IP address.
///
/// This is the canonical result shape returned to the caller. Every field
/// is optional because providers differ in what they report; the normaliser
/// fills in whatever the winning provider's payload carried.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// The IP address the record describes
    pub ip: Option<String>,
    /// City name
    pub city: Option<String>,
    /// Region/state name
    pub region: Option<String>,
    /// Region/state code
    pub region_code: Option<String>,
    /// Country name
    pub country: Option<String>,
    /// Country code (ISO 3166-1 alpha-2)
    pub country_code: Option<String>,
    /// Postal/ZIP code
    pub postal: Option<String>,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// IANA timezone name
    pub timezone: Option<String>,
    /// Organisation or ISP owning the address
    pub org: Option<String>,
}
