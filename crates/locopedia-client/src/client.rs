use std::time::Duration;

use locopedia_core::FetchError;
use reqwest::{Client, StatusCode, Url};

use crate::types::{LocationRecord, LocationsEnvelope};

/// HTTP gateway for the locations JSON endpoint.
///
/// Performs exactly one GET per call, with no retry. Anything but `200 OK`
/// is [`FetchError::InvalidResponse`]; a body that does not decode is
/// [`FetchError::Decoding`]; every other transport failure is
/// [`FetchError::Network`].
pub struct LocationsClient {
    client: Client,
}

impl LocationsClient {
    /// Creates a `LocationsClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::network)?;
        Ok(Self { client })
    }

    /// Fetches and decodes the `{ "locations": [...] }` document at `url`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidUrl`] — `url` is not an absolute http(s) URL (no request is made).
    /// - [`FetchError::InvalidResponse`] — any status other than 200.
    /// - [`FetchError::Network`] — connection, TLS, timeout or body read failure.
    /// - [`FetchError::Decoding`] — the body is not the expected JSON shape.
    pub async fn fetch_records(&self, url: &str) -> Result<Vec<LocationRecord>, FetchError> {
        let endpoint = parse_endpoint(url)?;

        tracing::debug!(url, "requesting locations");
        let response = self
            .client
            .get(endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::network)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(url, status = status.as_u16(), "locations endpoint returned non-200");
            return Err(FetchError::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(FetchError::network)?;
        let envelope = serde_json::from_str::<LocationsEnvelope>(&body)
            .map_err(|e| FetchError::decoding(format!("locations from {url}"), e))?;

        tracing::debug!(url, records = envelope.locations.len(), "decoded locations");
        Ok(envelope.locations)
    }
}

/// Parses `url` and requires an http or https scheme.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] describing why the URL was rejected.
fn parse_endpoint(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl {
            url: url.to_owned(),
            reason: format!("unsupported scheme \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
