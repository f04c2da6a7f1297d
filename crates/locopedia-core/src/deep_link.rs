//! Deep links into companion applications.
//!
//! Every builder shares one contract: an invalid location never produces a
//! launchable link, and the same location always renders the same URL.
//! Coordinates are written with `f64`'s `Display`, the shortest string that
//! round-trips (`52.3676`, `-34.6037`).

use std::fmt;
use std::str::FromStr;

use url::{form_urlencoded, Url};

use crate::error::DeepLinkError;
use crate::location::Location;

/// Builds a URL that opens a companion application at a location.
pub trait DeepLinkBuilder: Send + Sync {
    /// Returns `None` when `location` fails the coordinate validator.
    fn build(&self, location: &Location) -> Option<Url>;
}

/// `abnamro-test://places?lat=<lat>&lon=<lon>`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacesDeepLink;

impl PlacesDeepLink {
    pub const SCHEME: &'static str = "abnamro-test";
    pub const HOST: &'static str = "places";
    pub const LATITUDE_PARAM: &'static str = "lat";
    pub const LONGITUDE_PARAM: &'static str = "lon";
}

impl DeepLinkBuilder for PlacesDeepLink {
    fn build(&self, location: &Location) -> Option<Url> {
        if !location.is_valid() {
            return None;
        }
        let mut url = base_url(&format!("{}://{}", Self::SCHEME, Self::HOST))?;
        url.query_pairs_mut()
            .append_pair(Self::LATITUDE_PARAM, &location.latitude.to_string())
            .append_pair(Self::LONGITUDE_PARAM, &location.longitude.to_string());
        Some(url)
    }
}

/// `comgooglemaps://?center=<lat>,<lon>&q=<name>`
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleMapsDeepLink;

impl DeepLinkBuilder for GoogleMapsDeepLink {
    fn build(&self, location: &Location) -> Option<Url> {
        if !location.is_valid() {
            return None;
        }
        let mut url = base_url("comgooglemaps://")?;
        url.set_query(Some(&map_query("center", location)));
        Some(url)
    }
}

/// `maps://?ll=<lat>,<lon>&q=<name>`
#[derive(Debug, Clone, Copy, Default)]
pub struct AppleMapsDeepLink;

impl DeepLinkBuilder for AppleMapsDeepLink {
    fn build(&self, location: &Location) -> Option<Url> {
        if !location.is_valid() {
            return None;
        }
        let mut url = base_url("maps://")?;
        url.set_query(Some(&map_query("ll", location)));
        Some(url)
    }
}

fn base_url(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!(base = raw, error = %e, "deep link base URL does not parse");
            None
        }
    }
}

/// `<key>=<lat>,<lon>&q=<name>`, the coordinate comma unescaped.
fn map_query(coordinate_key: &str, location: &Location) -> String {
    let name: String = form_urlencoded::byte_serialize(location.name.as_bytes()).collect();
    format!(
        "{coordinate_key}={},{}&q={name}",
        location.latitude, location.longitude
    )
}

/// Selects which companion application deep links are built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeepLinkTarget {
    #[default]
    Places,
    GoogleMaps,
    AppleMaps,
}

impl DeepLinkTarget {
    #[must_use]
    pub fn builder(self) -> Box<dyn DeepLinkBuilder> {
        match self {
            Self::Places => Box::new(PlacesDeepLink),
            Self::GoogleMaps => Box::new(GoogleMapsDeepLink),
            Self::AppleMaps => Box::new(AppleMapsDeepLink),
        }
    }
}

impl fmt::Display for DeepLinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Places => write!(f, "places"),
            Self::GoogleMaps => write!(f, "google-maps"),
            Self::AppleMaps => write!(f, "apple-maps"),
        }
    }
}

impl FromStr for DeepLinkTarget {
    type Err = DeepLinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "places" => Ok(Self::Places),
            "google-maps" => Ok(Self::GoogleMaps),
            "apple-maps" => Ok(Self::AppleMaps),
            _ => Err(DeepLinkError::UnknownTarget(s.to_owned())),
        }
    }
}
