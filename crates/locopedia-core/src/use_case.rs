use std::sync::Arc;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::location::Location;
use crate::repository::LocationRepository;
use crate::rules::{CoordinateRange, LocationRule};

/// Fetches the locations a user may pick from.
#[async_trait]
pub trait FetchLocations: Send + Sync {
    /// # Errors
    ///
    /// Forwards the repository's [`FetchError`] unchanged.
    async fn execute(&self) -> Result<Vec<Location>, FetchError>;
}

/// Calls the repository once and keeps the locations the rule accepts.
///
/// No caching and no retry. Order is preserved and duplicates are kept.
pub struct FetchLocationsUseCase {
    repository: Arc<dyn LocationRepository>,
    rule: Arc<dyn LocationRule>,
}

impl FetchLocationsUseCase {
    /// Uses the canonical [`CoordinateRange`] rule.
    #[must_use]
    pub fn new(repository: Arc<dyn LocationRepository>) -> Self {
        Self::with_rule(repository, Arc::new(CoordinateRange))
    }

    #[must_use]
    pub fn with_rule(repository: Arc<dyn LocationRepository>, rule: Arc<dyn LocationRule>) -> Self {
        Self { repository, rule }
    }
}

#[async_trait]
impl FetchLocations for FetchLocationsUseCase {
    async fn execute(&self) -> Result<Vec<Location>, FetchError> {
        let fetched = self.repository.fetch_locations().await?;
        let total = fetched.len();

        let kept: Vec<Location> = fetched
            .into_iter()
            .filter(|location| self.rule.accepts(location))
            .collect();

        tracing::info!(
            kept = kept.len(),
            dropped = total - kept.len(),
            "filtered fetched locations"
        );
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::rules::BoundingBox;

    struct StubRepository {
        locations: Vec<Location>,
        fail_with_status: Option<u16>,
        calls: AtomicU32,
    }

    impl StubRepository {
        fn returning(locations: Vec<Location>) -> Self {
            Self {
                locations,
                fail_with_status: None,
                calls: AtomicU32::new(0),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                locations: Vec::new(),
                fail_with_status: Some(status),
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl LocationRepository for StubRepository {
        async fn fetch_locations(&self) -> Result<Vec<Location>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail_with_status {
                Some(status) => Err(FetchError::InvalidResponse { status }),
                None => Ok(self.locations.clone()),
            }
        }
    }

    fn mixed_locations() -> Vec<Location> {
        vec![
            Location::new("Valid1", 52.37, 4.90),
            Location::new("Invalid", 200.0, 4.90),
            Location::new("Valid2", 51.92, 4.48),
            Location::new("Invalid2", 52.37, 300.0),
        ]
    }

    #[tokio::test]
    async fn returns_only_valid_locations_in_order() {
        let use_case =
            FetchLocationsUseCase::new(Arc::new(StubRepository::returning(mixed_locations())));

        let locations = use_case.execute().await.expect("stub should succeed");

        assert_eq!(
            locations,
            vec![
                Location::new("Valid1", 52.37, 4.90),
                Location::new("Valid2", 51.92, 4.48),
            ]
        );
    }

    #[tokio::test]
    async fn all_invalid_input_yields_empty_result() {
        let use_case = FetchLocationsUseCase::new(Arc::new(StubRepository::returning(vec![
            Location::new("Invalid1", 200.0, 4.90),
            Location::new("Invalid2", 52.37, 300.0),
        ])));

        let locations = use_case.execute().await.expect("stub should succeed");
        assert!(locations.is_empty());
    }

    #[tokio::test]
    async fn keeps_duplicates() {
        let use_case = FetchLocationsUseCase::new(Arc::new(StubRepository::returning(vec![
            Location::new("Amsterdam", 52.37, 4.90),
            Location::new("Amsterdam", 52.37, 4.90),
        ])));

        assert_eq!(use_case.execute().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn forwards_repository_error_unchanged() {
        let use_case = FetchLocationsUseCase::new(Arc::new(StubRepository::failing(503)));

        let err = use_case.execute().await.unwrap_err();
        assert!(
            matches!(err, FetchError::InvalidResponse { status: 503 }),
            "expected InvalidResponse(503), got: {err:?}"
        );
    }

    #[tokio::test]
    async fn calls_repository_once_per_execution() {
        let repository = Arc::new(StubRepository::failing(500));
        let use_case = FetchLocationsUseCase::new(repository.clone());

        assert!(use_case.execute().await.is_err());
        assert_eq!(repository.calls.load(Ordering::SeqCst), 1);
        assert!(use_case.execute().await.is_err());
        assert_eq!(repository.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn swapped_rule_restricts_region_without_touching_repository() {
        let benelux = BoundingBox {
            min_lat: 49.4,
            max_lat: 53.6,
            min_lon: 2.5,
            max_lon: 7.3,
        };
        let use_case = FetchLocationsUseCase::with_rule(
            Arc::new(StubRepository::returning(vec![
                Location::new("Amsterdam", 52.37, 4.90),
                Location::new("Madrid", 40.43, -3.74),
            ])),
            Arc::new(benelux),
        );

        let names: Vec<String> = use_case
            .execute()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["Amsterdam"]);
    }
}
