use crate::app_config::{AppConfig, Environment};
use crate::deep_link::DeepLinkTarget;
use crate::ConfigError;

pub const DEFAULT_LOCATIONS_URL: &str =
    "https://raw.githubusercontent.com/abnamrocoesd/assignment-ios/main/locations.json";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(invalid(var, format!("expected a boolean, got \"{other}\""))),
        }
    };

    let env = parse_environment(&or_default("LOCOPEDIA_ENV", "development"))?;
    let log_level = or_default("LOCOPEDIA_LOG_LEVEL", env.default_log_level());

    let locations_url = or_default("LOCOPEDIA_LOCATIONS_URL", DEFAULT_LOCATIONS_URL);
    if locations_url.trim().is_empty() {
        return Err(invalid("LOCOPEDIA_LOCATIONS_URL", "must be non-empty".to_string()));
    }

    let request_timeout_secs = parse_u64("LOCOPEDIA_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "LOCOPEDIA_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let user_agent = or_default("LOCOPEDIA_USER_AGENT", "locopedia/0.1 (places-browser)");

    let deep_link_target = or_default("LOCOPEDIA_DEEP_LINK_TARGET", "places")
        .parse::<DeepLinkTarget>()
        .map_err(|e| invalid("LOCOPEDIA_DEEP_LINK_TARGET", e.to_string()))?;

    let discard_stale_fetches = parse_bool("LOCOPEDIA_DISCARD_STALE_FETCHES", "true")?;

    let launch_command = lookup("LOCOPEDIA_LAUNCH_COMMAND")
        .ok()
        .map(|cmd| cmd.trim().to_string())
        .filter(|cmd| !cmd.is_empty());

    Ok(AppConfig {
        env,
        log_level,
        locations_url,
        request_timeout_secs,
        user_agent,
        deep_link_target,
        discard_stale_fetches,
        launch_command,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LOCOPEDIA_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
