//! Response types for the locations JSON endpoint.
//!
//! ## Observed shape
//!
//! ```json
//! { "locations": [ { "name": "Amsterdam", "lat": 52.3547498, "long": 4.8339215 },
//!                  { "lat": 40.4380638, "long": -3.7495758 } ] }
//! ```
//!
//! ### `name`
//! Optional. Some entries omit it entirely; a missing name becomes
//! [`UNKNOWN_PLACE`] when mapped to a domain [`Location`]. A name that is
//! present but empty is kept as-is.
//!
//! ### `lat` / `long`
//! Plain JSON numbers. The longitude key is `long`, not `lon`. Values are not
//! range-checked here: out-of-range entries decode fine and are filtered by
//! the use case.

use locopedia_core::Location;
use serde::Deserialize;

/// Name given to records that arrive without one.
pub const UNKNOWN_PLACE: &str = "Unknown Place";

#[derive(Debug, Clone, Deserialize)]
pub struct LocationsEnvelope {
    pub locations: Vec<LocationRecord>,
}

/// One location as decoded from the endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationRecord {
    #[serde(default)]
    pub name: Option<String>,
    pub lat: f64,
    pub long: f64,
}

impl LocationRecord {
    #[must_use]
    pub fn into_location(self) -> Location {
        let name = self.name.unwrap_or_else(|| UNKNOWN_PLACE.to_owned());
        Location::new(name, self.lat, self.long)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_location_copies_fields() {
        let record = LocationRecord {
            name: Some("Amsterdam".to_owned()),
            lat: 52.3676,
            long: 4.9041,
        };
        assert_eq!(
            record.into_location(),
            Location::new("Amsterdam", 52.3676, 4.9041)
        );
    }

    #[test]
    fn into_location_defaults_missing_name() {
        let record = LocationRecord {
            name: None,
            lat: 40.438_063_8,
            long: -3.749_575_8,
        };
        let location = record.into_location();
        assert_eq!(location.name, UNKNOWN_PLACE);
        assert!((location.latitude - 40.438_063_8).abs() < 1e-4);
        assert!((location.longitude - -3.749_575_8).abs() < 1e-4);
    }

    #[test]
    fn into_location_keeps_empty_name() {
        let record = LocationRecord {
            name: Some(String::new()),
            lat: 1.0,
            long: 2.0,
        };
        assert_eq!(record.into_location().name, "");
    }

    #[test]
    fn decodes_record_without_name() {
        let record: LocationRecord =
            serde_json::from_str(r#"{ "lat": 40.4380638, "long": -3.7495758 }"#).unwrap();
        assert!(record.name.is_none());
        assert!((record.lat - 40.438_063_8).abs() < 1e-4);
    }

    #[test]
    fn decodes_explicit_null_name() {
        let record: LocationRecord =
            serde_json::from_str(r#"{ "name": null, "lat": 1.5, "long": 2.5 }"#).unwrap();
        assert!(record.name.is_none());
    }

    #[test]
    fn rejects_record_missing_longitude() {
        let result = serde_json::from_str::<LocationRecord>(r#"{ "name": "x", "lat": 1.0 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn decodes_envelope() {
        let envelope: LocationsEnvelope = serde_json::from_str(
            r#"{ "locations": [
                { "name": "Amsterdam", "lat": 52.3547498, "long": 4.8339215 },
                { "name": "Mumbai", "lat": 19.0823998, "long": 72.8111468 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(envelope.locations.len(), 2);
        assert_eq!(envelope.locations[1].name.as_deref(), Some("Mumbai"));
    }
}
