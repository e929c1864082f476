use std::env;
use std::fmt;
use std::time::Duration;

use hyper::Uri;

use crate::constants::{self, API_KEY_ENV, BASE_URL_ENV, TIMEOUT_ENV};
use crate::error::ConfigError;

/// Opaque provider credential. Its `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        ApiKey(key.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Everything the transport needs to reach the provider.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub(crate) base_url: Uri,
    pub(crate) host: String,
    pub(crate) api_key: ApiKey,
    pub(crate) timeout: Duration,
}

impl ProviderConfig {
    /// Production endpoint with the default 10 second timeout.
    pub fn new(api_key: ApiKey) -> Self {
        ProviderConfig {
            base_url: constants::DEFAULT_BASE_URL.clone(),
            host: constants::PROVIDER_HOST.to_string(),
            api_key,
            timeout: constants::DEFAULT_TIMEOUT,
        }
    }

    /// Reads `RAPIDAPI_KEY`, plus the optional `CORONALOG_BASE_URL` and
    /// `CORONALOG_TIMEOUT_SECS` overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let key = lookup(API_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingEnv(API_KEY_ENV))?;
        let mut config = ProviderConfig::new(ApiKey::new(key));

        if let Some(url) = lookup(BASE_URL_ENV) {
            config = config.with_base_url(&url)?;
        }
        if let Some(secs) = lookup(TIMEOUT_ENV) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(secs.clone()))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Points the transport somewhere else, e.g. a local test double.
    /// Only the scheme and authority of `url` are used.
    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        };
        let uri: Uri = url.parse().map_err(|e: hyper::http::uri::InvalidUri| invalid(&e.to_string()))?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(invalid("expected scheme://host[:port]"));
        }
        self.base_url = uri;
        Ok(self)
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Uri {
        &self.base_url
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_target_the_production_provider() {
        let config = ProviderConfig::new(ApiKey::new("secret"));
        assert_eq!(config.base_url().scheme_str(), Some("https"));
        assert_eq!(config.base_url().host(), Some("covid-193.p.rapidapi.com"));
        assert_eq!(config.host(), "covid-193.p.rapidapi.com");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let config = ProviderConfig::new(ApiKey::new("super-secret-key"));
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret-key"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn env_requires_a_key() {
        let err = ProviderConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv("RAPIDAPI_KEY")));

        let err = ProviderConfig::from_lookup(lookup_from(&[("RAPIDAPI_KEY", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(_)));
    }

    #[test]
    fn env_overrides_are_applied() {
        let config = ProviderConfig::from_lookup(lookup_from(&[
            ("RAPIDAPI_KEY", "k"),
            ("CORONALOG_BASE_URL", "http://127.0.0.1:8080"),
            ("CORONALOG_TIMEOUT_SECS", " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.base_url().scheme_str(), Some("http"));
        assert_eq!(config.base_url().port_u16(), Some(8080));
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.api_key.expose(), "k");
    }

    #[test]
    fn bad_overrides_are_rejected() {
        let err = ProviderConfig::from_lookup(lookup_from(&[
            ("RAPIDAPI_KEY", "k"),
            ("CORONALOG_TIMEOUT_SECS", "ten"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout(_)));

        let err = ProviderConfig::new(ApiKey::new("k"))
            .with_base_url("/just/a/path")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }
}
