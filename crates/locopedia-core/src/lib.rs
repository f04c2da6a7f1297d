pub mod app_config;
pub mod config;
pub mod deep_link;
pub mod error;
pub mod location;
pub mod repository;
pub mod rules;
pub mod use_case;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use deep_link::{
    AppleMapsDeepLink, DeepLinkBuilder, DeepLinkTarget, GoogleMapsDeepLink, PlacesDeepLink,
};
pub use error::{ConfigError, DeepLinkError, FetchError};
pub use location::{is_valid, Location};
pub use repository::LocationRepository;
pub use rules::{BoundingBox, CoordinateRange, LocationRule};
pub use use_case::{FetchLocations, FetchLocationsUseCase};
