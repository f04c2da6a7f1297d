use std::ops::RangeInclusive;

use serde::Serialize;
use uuid::Uuid;

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// A named coordinate pair.
///
/// `id` is assigned at construction and is not part of equality: two values
/// with the same name, latitude and longitude compare equal regardless of
/// where they came from.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Whether the coordinates are inside the valid latitude/longitude ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid(self.latitude, self.longitude, &self.name)
    }
}

impl PartialEq for Location {
    // Exact comparison: values are compared as decoded, never computed.
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.latitude == other.latitude
            && self.longitude == other.longitude
    }
}

/// Coordinate validator.
///
/// True iff `-90 <= latitude <= 90` and `-180 <= longitude <= 180`, bounds
/// inclusive. The name is accepted for signature compatibility with other
/// rules but is not constrained. NaN in either coordinate is invalid.
#[must_use]
pub fn is_valid(latitude: f64, longitude: f64, _name: &str) -> bool {
    if latitude.is_nan() || longitude.is_nan() {
        return false;
    }
    LATITUDE_RANGE.contains(&latitude) && LONGITUDE_RANGE.contains(&longitude)
}

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;
