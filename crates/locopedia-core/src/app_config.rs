use crate::deep_link::DeepLinkTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Log filter used when `LOCOPEDIA_LOG_LEVEL` is unset.
    #[must_use]
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Test => "warn",
            Environment::Production => "info",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub locations_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub deep_link_target: DeepLinkTarget,
    /// Drop results of superseded `load_locations` calls instead of letting
    /// the last completion win.
    pub discard_stale_fetches: bool,
    /// Program handed each deep link; `None` prints the link instead.
    pub launch_command: Option<String>,
}
