//! Client configuration.

use std::time::Duration;

use crate::models::{RecommendRequest, MAX_RESULTS, MIN_RESULTS};

/// Default API location (the service's development address).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Configuration for [`RecommendClient`](crate::client::RecommendClient)
/// and the requests it builds.
///
/// # Example
///
/// ```ignore
/// use cinematch::config::ClientConfig;
///
/// let config = ClientConfig::from_env()
///     .with_language("en")
///     .with_max_results(5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Default result count for new requests (1..=10)
    pub max_results: u8,
    /// Default language tag for new requests
    pub language: String,
    /// Timeout for buffered requests, in seconds
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_results: 3,
            language: "es".to_string(),
            request_timeout_secs: 120,
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. Trailing slashes are dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the default result count, clamped to 1..=10.
    pub fn with_max_results(mut self, max_results: u8) -> Self {
        self.max_results = max_results.clamp(MIN_RESULTS, MAX_RESULTS);
        self
    }

    /// Set the default language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the buffered request timeout.
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Start a request for `query` carrying this config's defaults.
    pub fn request(&self, query: impl Into<String>) -> RecommendRequest {
        RecommendRequest::new(query)
            .with_max_results(self.max_results)
            .with_language(self.language.clone())
    }

    /// Defaults overridden by `CINEMATCH_API_URL`, `CINEMATCH_MAX_RESULTS`,
    /// `CINEMATCH_LANGUAGE` and `CINEMATCH_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    /// Unparsable numbers are ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("CINEMATCH_API_URL").filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }
        if let Some(raw) = lookup("CINEMATCH_MAX_RESULTS") {
            match raw.trim().parse::<u8>() {
                Ok(n) => config = config.with_max_results(n),
                Err(e) => tracing::warn!(value = %raw, error = %e, "ignoring CINEMATCH_MAX_RESULTS"),
            }
        }
        if let Some(language) = lookup("CINEMATCH_LANGUAGE").filter(|v| !v.trim().is_empty()) {
            config = config.with_language(language.trim());
        }
        if let Some(raw) = lookup("CINEMATCH_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_request_timeout_secs(secs),
                Ok(_) => tracing::warn!("ignoring zero CINEMATCH_TIMEOUT_SECS"),
                Err(e) => tracing::warn!(value = %raw, error = %e, "ignoring CINEMATCH_TIMEOUT_SECS"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.max_results, 3);
        assert_eq!(config.language, "es");
        assert_eq!(config.request_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new()
            .with_base_url("https://cine.example/")
            .with_max_results(42)
            .with_language("en")
            .with_request_timeout_secs(30);
        assert_eq!(config.base_url, "https://cine.example");
        assert_eq!(config.max_results, 10);
        assert_eq!(config.language, "en");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("CINEMATCH_API_URL", "http://10.0.0.5:8000/"),
            ("CINEMATCH_MAX_RESULTS", "5"),
            ("CINEMATCH_LANGUAGE", "en"),
            ("CINEMATCH_TIMEOUT_SECS", "60"),
        ]));
        assert_eq!(config.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.max_results, 5);
        assert_eq!(config.language, "en");
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn test_from_lookup_ignores_invalid_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("CINEMATCH_MAX_RESULTS", "muchos"),
            ("CINEMATCH_TIMEOUT_SECS", "0"),
            ("CINEMATCH_LANGUAGE", "  "),
        ]));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_request_uses_defaults() {
        let config = ClientConfig::new().with_max_results(7).with_language("en");
        let request = config.request("heist movies");
        assert_eq!(request.max_results, 7);
        assert_eq!(request.language, "en");
        assert_eq!(request.session_id, None);
    }
}
