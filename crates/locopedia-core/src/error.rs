use thiserror::Error;

/// Boxed underlying cause carried by transport-level errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures produced while fetching locations.
///
/// Raised at the gateway/repository boundary and forwarded unchanged by the
/// use case. `Display` is the human-readable message shown to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("network error: {0}")]
    Network(#[source] BoxError),

    #[error("invalid response: HTTP status {status}")]
    InvalidResponse { status: u16 },

    #[error("decoding error for {context}: {source}")]
    Decoding {
        context: String,
        #[source]
        source: BoxError,
    },
}

impl FetchError {
    #[must_use]
    pub fn network(cause: impl Into<BoxError>) -> Self {
        Self::Network(cause.into())
    }

    #[must_use]
    pub fn decoding(context: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::Decoding {
            context: context.into(),
            source: cause.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum DeepLinkError {
    #[error("unknown deep link target \"{0}\" (expected one of: places, google-maps, apple-maps)")]
    UnknownTarget(String),
}
