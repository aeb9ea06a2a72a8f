use crate::error::{Call, Error};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin wrapper around a [`reqwest::Client`] that turns GET requests into
/// decoded JSON, mapping every failure onto [`Error`] tagged with the
/// [`Call`] that made it.
#[derive(Debug, Clone)]
pub struct JsonClient {
    client: reqwest::Client,
}

impl JsonClient {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build http client: {e}")))?;
        Ok(Self { client })
    }

    /// GET `base_url` extended with `segments` (each percent-encoded) and
    /// decode the body as `T`.
    ///
    /// A 404 becomes [`Error::NotFound`], so callers that treat absence as
    /// data can match on it.
    pub async fn get<T: DeserializeOwned>(
        &self,
        call: Call,
        base_url: &str,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let url = build_url(base_url, segments)?;
        debug!("GET {call}: {}", url.path());

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| unavailable(call, source))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(call));
        }
        let response = response
            .error_for_status()
            .map_err(|source| unavailable(call, source))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|source| unavailable(call, source))?;
        serde_json::from_slice(&bytes).map_err(|e| Error::Malformed {
            call,
            reason: e.to_string(),
        })
    }
}

// The url carries the api key as a query parameter, so it never goes into the
// error.
fn unavailable(call: Call, source: reqwest::Error) -> Error {
    Error::UpstreamUnavailable {
        call,
        source: source.without_url(),
    }
}

fn build_url(base_url: &str, segments: &[&str]) -> Result<Url, Error> {
    let mut url = Url::parse(base_url)
        .map_err(|e| Error::Configuration(format!("invalid base url {base_url:?}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| Error::Configuration(format!("base url {base_url:?} cannot have a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
