//! View-state controller for the locations screen.
//!
//! The controller is the only writer of [`ViewState`]. State lives in a
//! `tokio::sync::watch` channel: fetch completions run on spawned tasks but
//! every write goes through the channel's sender, so writes are serialized
//! and observers see each committed state.
//!
//! Overlapping `load_locations` calls each carry a generation number. With
//! stale-result discarding on (the default) a completion only commits when
//! its generation is still the newest; with it off the last completion wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use locopedia_core::{DeepLinkBuilder, FetchLocations, Location};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::draft::CustomLocationDraft;
use crate::launcher::Launcher;
use crate::view_state::{filter_by_name, ViewState};

pub struct LocationsController {
    fetch_locations: Arc<dyn FetchLocations>,
    deep_links: Arc<dyn DeepLinkBuilder>,
    launcher: Arc<dyn Launcher>,
    state: Arc<watch::Sender<ViewState>>,
    generation: Arc<AtomicU64>,
    discard_stale_results: bool,
    search_text: String,
    draft: CustomLocationDraft,
}

impl LocationsController {
    /// Creates a controller in the [`ViewState::Idle`] state.
    #[must_use]
    pub fn new(
        fetch_locations: Arc<dyn FetchLocations>,
        deep_links: Arc<dyn DeepLinkBuilder>,
        launcher: Arc<dyn Launcher>,
    ) -> Self {
        let (state, _) = watch::channel(ViewState::Idle);
        Self {
            fetch_locations,
            deep_links,
            launcher,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            discard_stale_results: true,
            search_text: String::new(),
            draft: CustomLocationDraft::default(),
        }
    }

    /// When `false`, every completion is written even if a newer load was
    /// started after it.
    #[must_use]
    pub fn discard_stale_results(mut self, discard: bool) -> Self {
        self.discard_stale_results = discard;
        self
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// A receiver notified on every committed state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Sets the state to [`ViewState::Loading`] and fetches in the background.
    ///
    /// Returns immediately; the handle resolves once the result has been
    /// committed (or discarded as stale).
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn load_locations(&self) -> JoinHandle<()> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(ViewState::Loading);
        tracing::debug!(generation = token, "loading locations");

        let fetch_locations = Arc::clone(&self.fetch_locations);
        let state = Arc::clone(&self.state);
        let generation = Arc::clone(&self.generation);
        let discard_stale_results = self.discard_stale_results;

        tokio::spawn(async move {
            let next = match fetch_locations.execute().await {
                Ok(locations) => {
                    tracing::info!(generation = token, count = locations.len(), "locations loaded");
                    ViewState::Loaded(locations)
                }
                Err(err) => {
                    tracing::warn!(generation = token, error = %err, "failed to load locations");
                    ViewState::Error(err.to_string())
                }
            };

            let committed = state.send_if_modified(|current| {
                if discard_stale_results && generation.load(Ordering::SeqCst) != token {
                    return false;
                }
                *current = next;
                true
            });
            if !committed {
                tracing::debug!(generation = token, "discarded stale load result");
            }
        })
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Updates the search text. Never changes the view state.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Loaded locations whose name contains the search text, ignoring case.
    ///
    /// Empty unless the state is [`ViewState::Loaded`].
    #[must_use]
    pub fn visible_locations(&self) -> Vec<Location> {
        self.state
            .borrow()
            .locations()
            .map(|locations| filter_by_name(locations, &self.search_text))
            .unwrap_or_default()
    }

    /// Builds a deep link for `location` and hands it to the launcher.
    ///
    /// An invalid location only produces a warning.
    pub fn open_location(&self, location: &Location) {
        let Some(url) = self.deep_links.build(location) else {
            tracing::warn!(
                name = %location.name,
                latitude = location.latitude,
                longitude = location.longitude,
                "failed to create deep link"
            );
            return;
        };
        tracing::info!(name = %location.name, %url, "opening deep link");
        self.launcher.launch(&url);
    }

    #[must_use]
    pub fn draft(&self) -> &CustomLocationDraft {
        &self.draft
    }

    pub fn set_custom_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_custom_latitude(&mut self, latitude: impl Into<String>) {
        self.draft.latitude = latitude.into();
    }

    pub fn set_custom_longitude(&mut self, longitude: impl Into<String>) {
        self.draft.longitude = longitude.into();
    }

    #[must_use]
    pub fn is_custom_input_valid(&self) -> bool {
        self.draft.is_valid()
    }

    /// Opens the drafted location and clears the draft.
    ///
    /// Does nothing and returns `false` when the draft is invalid. The draft
    /// is cleared whether or not a link could be built.
    pub fn submit_custom_location(&mut self) -> bool {
        let Some(location) = self.draft.to_location() else {
            tracing::debug!("ignoring invalid custom location");
            return false;
        };
        self.open_location(&location);
        self.draft.clear();
        true
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
