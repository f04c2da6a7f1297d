//! Composition root: wires config into the client, use case and controller.

use std::sync::Arc;

use anyhow::{bail, Context};
use locopedia_client::{HttpLocationRepository, LocationsClient};
use locopedia_core::{
    AppConfig, BoundingBox, CoordinateRange, DeepLinkBuilder, DeepLinkTarget,
    FetchLocationsUseCase, Location, LocationRule,
};
use locopedia_presenter::{Launcher, LocationsController, ViewState};

use crate::launch::{CommandLauncher, PrintLauncher};

fn build_controller(
    config: &AppConfig,
    target: DeepLinkTarget,
    region: Option<BoundingBox>,
) -> anyhow::Result<LocationsController> {
    let client = LocationsClient::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build HTTP client")?;
    let repository = Arc::new(HttpLocationRepository::new(
        client,
        config.locations_url.clone(),
    ));

    let rule: Arc<dyn LocationRule> = match region {
        Some(bbox) => Arc::new(bbox),
        None => Arc::new(CoordinateRange),
    };
    let use_case = Arc::new(FetchLocationsUseCase::with_rule(repository, rule));

    let deep_links: Arc<dyn DeepLinkBuilder> = Arc::from(target.builder());
    let launcher: Arc<dyn Launcher> = match &config.launch_command {
        Some(program) => Arc::new(CommandLauncher::new(program.clone())),
        None => Arc::new(PrintLauncher),
    };

    Ok(LocationsController::new(use_case, deep_links, launcher)
        .discard_stale_results(config.discard_stale_fetches))
}

/// Loads locations and waits for the controller to settle.
///
/// # Errors
///
/// Returns an error carrying the controller's message when loading fails.
async fn load(controller: &LocationsController) -> anyhow::Result<()> {
    controller
        .load_locations()
        .await
        .context("location loading task failed")?;
    settled(controller.state())
}

fn settled(state: ViewState) -> anyhow::Result<()> {
    match state {
        ViewState::Loaded(_) => Ok(()),
        ViewState::Error(message) => bail!("failed to load locations: {message}"),
        other => bail!("unexpected state after loading: {other:?}"),
    }
}

pub(crate) async fn list(
    config: &AppConfig,
    target: DeepLinkTarget,
    region: Option<BoundingBox>,
    search: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let mut controller = build_controller(config, target, region)?;
    load(&controller).await?;
    if let Some(search) = search {
        controller.set_search_text(search);
    }

    let visible = controller.visible_locations();
    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        for location in &visible {
            println!("{}", format_row(location));
        }
    }
    Ok(())
}

pub(crate) async fn open(
    config: &AppConfig,
    target: DeepLinkTarget,
    name: &str,
) -> anyhow::Result<()> {
    let mut controller = build_controller(config, target, None)?;
    load(&controller).await?;
    controller.set_search_text(name);

    let Some(location) = pick_by_name(&controller.visible_locations(), name) else {
        bail!("no location named \"{name}\"");
    };
    controller.open_location(&location);
    Ok(())
}

pub(crate) fn custom(
    config: &AppConfig,
    target: DeepLinkTarget,
    name: String,
    lat: String,
    lon: String,
) -> anyhow::Result<()> {
    let mut controller = build_controller(config, target, None)?;
    controller.set_custom_name(name);
    controller.set_custom_latitude(lat);
    controller.set_custom_longitude(lon);

    if !controller.submit_custom_location() {
        bail!(
            "invalid custom location: name must be non-blank, latitude within [-90, 90] \
             and longitude within [-180, 180]"
        );
    }
    Ok(())
}

fn format_row(location: &Location) -> String {
    format!(
        "{}\t{}\t{}",
        location.name, location.latitude, location.longitude
    )
}

/// First location whose name equals `name`, ignoring case.
fn pick_by_name(locations: &[Location], name: &str) -> Option<Location> {
    let wanted = name.to_lowercase();
    locations
        .iter()
        .find(|location| location.name.to_lowercase() == wanted)
        .cloned()
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
