use async_trait::async_trait;
use locopedia_core::{FetchError, Location, LocationRepository};

use crate::client::LocationsClient;

/// [`LocationRepository`] backed by one fixed HTTP endpoint.
pub struct HttpLocationRepository {
    client: LocationsClient,
    url: String,
}

impl HttpLocationRepository {
    #[must_use]
    pub fn new(client: LocationsClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl LocationRepository for HttpLocationRepository {
    async fn fetch_locations(&self) -> Result<Vec<Location>, FetchError> {
        let records = self.client.fetch_records(&self.url).await?;
        let locations: Vec<Location> = records
            .into_iter()
            .map(crate::types::LocationRecord::into_location)
            .collect();
        tracing::debug!(url = %self.url, count = locations.len(), "mapped location records");
        Ok(locations)
    }
}
