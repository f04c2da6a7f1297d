mod app;
mod launch;

use clap::{Parser, Subcommand};
use locopedia_core::{BoundingBox, DeepLinkTarget};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "locopedia")]
#[command(about = "Browse named places and open them in a companion app")]
struct Cli {
    /// Companion app to build deep links for: places, google-maps or apple-maps.
    #[arg(long, global = true)]
    target: Option<DeepLinkTarget>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the location list and print the valid entries.
    List {
        /// Only show names containing this text (case-insensitive).
        #[arg(long)]
        search: Option<String>,
        /// Print JSON instead of tab-separated lines.
        #[arg(long)]
        json: bool,
        /// Restrict to `min_lat,max_lat,min_lon,max_lon`.
        #[arg(long, value_parser = BoundingBox::parse, allow_hyphen_values = true)]
        bbox: Option<BoundingBox>,
    },
    /// Open a fetched location by name.
    Open { name: String },
    /// Open a location entered by hand.
    Custom {
        #[arg(long)]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: String,
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = locopedia_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let target = cli.target.unwrap_or(config.deep_link_target);
    tracing::debug!(env = %config.env, %target, "starting");

    match cli.command {
        Commands::List { search, json, bbox } => {
            app::list(&config, target, bbox, search.as_deref(), json).await
        }
        Commands::Open { name } => app::open(&config, target, &name).await,
        Commands::Custom { name, lat, lon } => app::custom(&config, target, name, lat, lon),
    }
}
