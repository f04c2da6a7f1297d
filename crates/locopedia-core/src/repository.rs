use async_trait::async_trait;

use crate::error::FetchError;
use crate::location::Location;

/// Source of locations, one fetch per call.
///
/// Implementations map transport records to [`Location`]s and report
/// transport failures as [`FetchError`]. They never filter: deciding which
/// locations are usable belongs to the use case.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns [`FetchError`] when the locations cannot be fetched or decoded.
    async fn fetch_locations(&self) -> Result<Vec<Location>, FetchError>;
}
