//! Field Map Normaliser
//!
//! Implements ResponseNormaliser by renaming fields across the known
//! provider vocabularies into the canonical shape.

use crate::domain::entities::GeoLocation;
use crate::domain::ports::ResponseNormaliser;
use serde_json::Value;

/// Normaliser covering the ipapi.co and ip-api.com response shapes.
///
/// Pure field renaming, first present alias wins. Unknown fields are
/// ignored; missing fields stay `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMapNormaliser;

impl ResponseNormaliser for FieldMapNormaliser {
    fn normalise(&self, raw: &Value) -> GeoLocation {
        GeoLocation {
            ip: first_str(raw, &["ip", "query"]),
            city: first_str(raw, &["city"]),
            region: first_str(raw, &["regionName", "region"]),
            region_code: first_str(raw, &["region_code", "regionCode"]),
            country: first_str(raw, &["country_name", "country"]),
            country_code: first_str(raw, &["country_code", "countryCode"]),
            postal: first_str(raw, &["postal", "zip"]),
            latitude: first_f64(raw, &["latitude", "lat"]),
            longitude: first_f64(raw, &["longitude", "lon"]),
            timezone: first_str(raw, &["timezone"]),
            org: first_str(raw, &["org", "isp"]),
        }
    }
}

/// First alias present as a non-empty string.
fn first_str(raw: &Value, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|key| raw.get(key))
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .map(str::to_owned)
}

/// First alias present as a number, or a string parsing as one.
fn first_f64(raw: &Value, aliases: &[&str]) -> Option<f64> {
    aliases.iter().filter_map(|key| raw.get(key)).find_map(|v| {
        v.as_f64()
            .or_else(|| v.as_str().and_then(|s| s.parse().ok()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalise_ipapi_co_shape() {
        let raw = json!({
            "ip": "8.8.8.8",
            "city": "Mountain View",
            "region": "California",
            "region_code": "CA",
            "country": "US",
            "country_name": "United States",
            "country_code": "US",
            "postal": "94035",
            "latitude": 37.386,
            "longitude": -122.0838,
            "timezone": "America/Los_Angeles",
            "org": "Google LLC"
        });

        let loc = FieldMapNormaliser.normalise(&raw);
        assert_eq!(loc.ip.as_deref(), Some("8.8.8.8"));
        assert_eq!(loc.city.as_deref(), Some("Mountain View"));
        assert_eq!(loc.region.as_deref(), Some("California"));
        assert_eq!(loc.region_code.as_deref(), Some("CA"));
        assert_eq!(loc.country.as_deref(), Some("United States"));
        assert_eq!(loc.country_code.as_deref(), Some("US"));
        assert_eq!(loc.postal.as_deref(), Some("94035"));
        assert_eq!(loc.latitude, Some(37.386));
        assert_eq!(loc.longitude, Some(-122.0838));
        assert_eq!(loc.timezone.as_deref(), Some("America/Los_Angeles"));
        assert_eq!(loc.org.as_deref(), Some("Google LLC"));
    }

    #[test]
    fn test_normalise_ip_api_com_shape() {
        let raw = json!({
            "query": "8.8.8.8",
            "city": "Ashburn",
            "regionName": "Virginia",
            "country": "United States",
            "countryCode": "US",
            "zip": "20149",
            "lat": 39.03,
            "lon": -77.5,
            "timezone": "America/New_York",
            "isp": "Google LLC"
        });

        let loc = FieldMapNormaliser.normalise(&raw);
        assert_eq!(loc.ip.as_deref(), Some("8.8.8.8"));
        assert_eq!(loc.region.as_deref(), Some("Virginia"));
        assert_eq!(loc.country.as_deref(), Some("United States"));
        assert_eq!(loc.country_code.as_deref(), Some("US"));
        assert_eq!(loc.postal.as_deref(), Some("20149"));
        assert_eq!(loc.latitude, Some(39.03));
        assert_eq!(loc.longitude, Some(-77.5));
        assert_eq!(loc.org.as_deref(), Some("Google LLC"));
    }

    #[test]
    fn test_normalise_numeric_string_coordinates() {
        let raw = json!({ "latitude": "37.386", "longitude": "-122.0838" });
        let loc = FieldMapNormaliser.normalise(&raw);
        assert_eq!(loc.latitude, Some(37.386));
        assert_eq!(loc.longitude, Some(-122.0838));
    }

    #[test]
    fn test_normalise_empty_object() {
        let loc = FieldMapNormaliser.normalise(&json!({}));
        assert_eq!(loc, GeoLocation::default());
    }

    #[test]
    fn test_normalise_ignores_unknown_fields() {
        let raw = json!({ "asn": "AS15169", "hosting": true, "city": "Ashburn" });
        let loc = FieldMapNormaliser.normalise(&raw);
        assert_eq!(loc.city.as_deref(), Some("Ashburn"));
        assert!(loc.org.is_none());
    }

    #[test]
    fn test_normalise_is_deterministic() {
        let raw = json!({ "ip": "1.1.1.1", "country_name": "Australia", "lat": -33.86 });
        let first = FieldMapNormaliser.normalise(&raw);
        let second = FieldMapNormaliser.normalise(&raw);
        assert_eq!(first, second);
    }
}
