//! Business rules deciding which fetched locations are usable.

use crate::location::Location;

pub trait LocationRule: Send + Sync {
    fn accepts(&self, location: &Location) -> bool;
}

/// The canonical rule: coordinates inside the valid latitude/longitude ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateRange;

impl LocationRule for CoordinateRange {
    fn accepts(&self, location: &Location) -> bool {
        location.is_valid()
    }
}

/// Restricts locations to a rectangular region, bounds inclusive.
///
/// Locations must also pass [`CoordinateRange`]; a box wider than the globe
/// does not widen what is considered valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Parses `min_lat,max_lat,min_lon,max_lon`.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the input does not have exactly
    /// four finite numbers or a minimum exceeds its maximum.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let values = raw
            .split(',')
            .map(|part| {
                let trimmed = part.trim();
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| format!("\"{trimmed}\" is not a finite number"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let &[min_lat, max_lat, min_lon, max_lon] = values.as_slice() else {
            return Err(format!(
                "expected 4 comma-separated values (min_lat,max_lat,min_lon,max_lon), got {}",
                values.len()
            ));
        };

        if min_lat > max_lat || min_lon > max_lon {
            return Err("minimum bound exceeds maximum bound".to_owned());
        }

        Ok(Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }
}

impl LocationRule for BoundingBox {
    fn accepts(&self, location: &Location) -> bool {
        location.is_valid()
            && self.min_lat <= location.latitude
            && location.latitude <= self.max_lat
            && self.min_lon <= location.longitude
            && location.longitude <= self.max_lon
    }
}
