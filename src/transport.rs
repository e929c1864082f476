use std::borrow::Cow;
use std::io::Read;

use flate2::read::GzDecoder;
use hyper::client::HttpConnector;
use hyper::header::{HeaderValue, CONTENT_ENCODING};
use hyper::http::uri::PathAndQuery;
use hyper::{body, Body, Client, Method, Request, StatusCode, Uri};
use hyper_tls::HttpsConnector;
use serde_json::Value;

use crate::config::ProviderConfig;
use crate::constants::{HISTORY_PATH, HOST_HEADER, KEY_HEADER, STATISTICS_PATH};
use crate::error::{ConfigError, RequestError, RequestOutcome};
use crate::mapper;
use crate::models::{CountryCaseCount, WorldwideSnapshot};

/// Client for the covid-193 statistics provider.
///
/// Each fetch issues exactly one GET and resolves exactly once. There are no
/// retries and no caching. Clones share the underlying connection pool.
#[derive(Clone)]
pub struct CovidClient {
    client: Client<HttpsConnector<HttpConnector>, Body>,
    config: ProviderConfig,
    host: HeaderValue,
    key: HeaderValue,
}

impl CovidClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ConfigError> {
        let host = HeaderValue::from_str(&config.host).map_err(|_| ConfigError::InvalidHost(config.host.clone()))?;
        let mut key = HeaderValue::from_str(config.api_key.expose()).map_err(|_| ConfigError::InvalidApiKey)?;
        key.set_sensitive(true);

        Ok(CovidClient {
            client: Client::builder().build::<_, Body>(HttpsConnector::new()),
            config,
            host,
            key,
        })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Global totals for `date` (`YYYY-MM-DD`). The date is sent as given;
    /// a malformed one is left for the provider to reject.
    pub async fn fetch_worldwide_history(&self, date: &str) -> RequestOutcome<WorldwideSnapshot> {
        let json = self.get_json(&format!("{HISTORY_PATH}?day={date}&country=all")).await?;
        mapper::map_worldwide(&json).ok_or_else(|| rejected(HISTORY_PATH))
    }

    /// Cumulative cases per country, largest first.
    pub async fn fetch_cases_by_country(&self) -> RequestOutcome<Vec<CountryCaseCount>> {
        let json = self.get_json(STATISTICS_PATH).await?;
        mapper::map_cases_by_country(&json).ok_or_else(|| rejected(STATISTICS_PATH))
    }

    async fn get_json(&self, path_and_query: &str) -> RequestOutcome<Value> {
        let uri = self.endpoint(path_and_query)?;
        tracing::debug!(%uri, "requesting");

        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(HOST_HEADER, self.host.clone())
            .header(KEY_HEADER, self.key.clone())
            .body(Body::empty())
            .map_err(|err| {
                tracing::warn!(error = %err, "could not build request");
                RequestError::UnableToComplete
            })?;

        let (status, gzipped, bytes) = match tokio::time::timeout(self.config.timeout, self.exchange(request)).await {
            Ok(Ok(parts)) => parts,
            Ok(Err(err)) => {
                tracing::warn!(path = path_and_query, error = %err, kind = RequestError::UnableToComplete.kind(), "request failed");
                return Err(RequestError::UnableToComplete);
            }
            Err(_) => {
                tracing::warn!(path = path_and_query, timeout = ?self.config.timeout, kind = RequestError::UnableToComplete.kind(), "request timed out");
                return Err(RequestError::UnableToComplete);
            }
        };

        if !status.is_success() {
            tracing::warn!(path = path_and_query, %status, "provider returned an error status");
        }

        let body: Cow<[u8]> = if gzipped {
            Cow::Owned(gunzip(&bytes)?)
        } else {
            Cow::Borrowed(&bytes[..])
        };

        if body.is_empty() {
            tracing::warn!(path = path_and_query, kind = RequestError::InvalidData.kind(), "empty body");
            return Err(RequestError::InvalidData);
        }

        serde_json::from_slice(&body).map_err(|err| {
            tracing::warn!(path = path_and_query, error = %err, kind = RequestError::InvalidJson.kind(), "body is not json");
            RequestError::InvalidJson
        })
    }

    /// Sends the request and collects the whole body.
    async fn exchange(&self, request: Request<Body>) -> Result<(StatusCode, bool, body::Bytes), hyper::Error> {
        let response = self.client.request(request).await?;
        let status = response.status();
        let gzipped = response
            .headers()
            .get(CONTENT_ENCODING)
            .map_or(false, |value| value.as_bytes().eq_ignore_ascii_case(b"gzip"));
        let bytes = body::to_bytes(response.into_body()).await?;
        Ok((status, gzipped, bytes))
    }

    fn endpoint(&self, path_and_query: &str) -> RequestOutcome<Uri> {
        let invalid = |reason: String| {
            tracing::warn!(path = path_and_query, reason = %reason, "request uri is not valid");
            RequestError::UnableToComplete
        };
        let mut parts = self.config.base_url.clone().into_parts();
        parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).map_err(|e| invalid(e.to_string()))?);
        Uri::from_parts(parts).map_err(|e| invalid(e.to_string()))
    }
}

fn gunzip(bytes: &[u8]) -> RequestOutcome<Vec<u8>> {
    let mut decoded = Vec::new();
    GzDecoder::new(bytes).read_to_end(&mut decoded).map_err(|err| {
        tracing::warn!(error = %err, kind = RequestError::InvalidData.kind(), "gzip body could not be decoded");
        RequestError::InvalidData
    })?;
    Ok(decoded)
}

fn rejected(path: &str) -> RequestError {
    tracing::warn!(path, kind = RequestError::InvalidResponse.kind(), "payload failed validation");
    RequestError::InvalidResponse
}
