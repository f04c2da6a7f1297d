use locopedia_core::{is_valid, Location};

/// Free-text input for a user-entered location.
///
/// Only promoted to a [`Location`] when the name is non-blank, both
/// coordinates parse as finite numbers, and the pair passes the coordinate
/// validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomLocationDraft {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
}

impl CustomLocationDraft {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.to_location().is_some()
    }

    /// The location described by the draft, with the name trimmed.
    #[must_use]
    pub fn to_location(&self) -> Option<Location> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let latitude = parse_coordinate(&self.latitude)?;
        let longitude = parse_coordinate(&self.longitude)?;
        if !is_valid(latitude, longitude, name) {
            return None;
        }
        Some(Location::new(name, latitude, longitude))
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.latitude.clear();
        self.longitude.clear();
    }
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}
