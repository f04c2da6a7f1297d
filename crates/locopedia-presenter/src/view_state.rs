use locopedia_core::Location;

/// What the presentation layer should currently render.
///
/// `Idle` is only ever the initial state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Location>),
    Error(String),
}

impl ViewState {
    /// The loaded locations, or `None` in any other state.
    #[must_use]
    pub fn locations(&self) -> Option<&[Location]> {
        match self {
            Self::Loaded(locations) => Some(locations),
            _ => None,
        }
    }
}

/// Case-insensitive substring search over location names.
///
/// An empty search returns every location in order.
#[must_use]
pub fn filter_by_name(locations: &[Location], search: &str) -> Vec<Location> {
    if search.is_empty() {
        return locations.to_vec();
    }
    let needle = search.to_lowercase();
    locations
        .iter()
        .filter(|location| location.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
