pub mod client;
pub mod repository;
pub mod types;

pub use client::LocationsClient;
pub use repository::HttpLocationRepository;
pub use types::{LocationRecord, LocationsEnvelope, UNKNOWN_PLACE};
