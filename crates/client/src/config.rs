//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SOCIETIES_API_URL` - Base URL of the societies REST API
//!
//! ## Optional
//! - `SOCIETIES_HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 15)
//! - `SOCIETIES_TOKEN_FILE` - File backing the persistent token slot
//!   (default: `.societies-token`)
//! - `SOCIETIES_SESSION_TOKEN` - Token for the session-scoped slot
//! - `SOCIETIES_LOG_FORMAT` - `text` or `json` (default: text)

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_TOKEN_FILE: &str = ".societies-token";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Client configuration.
///
/// Implements `Debug` manually to redact the session token.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API, always ending in `/`
    pub api_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
    /// File backing the persistent token slot
    pub token_file: PathBuf,
    /// Token for the session-scoped slot
    pub session_token: Option<SecretString>,
    /// Log output format
    pub log_format: LogFormat,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url.as_str())
            .field("timeout", &self.timeout)
            .field("token_file", &self.token_file)
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_url = get("SOCIETIES_API_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("SOCIETIES_API_URL".to_string()))?;
        let api_url = parse_base_url(&raw_url)?;

        let timeout_secs = match get("SOCIETIES_HTTP_TIMEOUT_SECS") {
            Some(value) => value.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("SOCIETIES_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "SOCIETIES_HTTP_TIMEOUT_SECS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let token_file = PathBuf::from(
            get("SOCIETIES_TOKEN_FILE").unwrap_or_else(|| DEFAULT_TOKEN_FILE.to_string()),
        );
        let session_token = get("SOCIETIES_SESSION_TOKEN").map(SecretString::from);

        let log_format = match get("SOCIETIES_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "SOCIETIES_LOG_FORMAT".to_string(),
                    format!("expected text or json, got {other}"),
                ));
            }
        };

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            token_file,
            session_token,
            log_format,
        })
    }

    /// Configuration for a given base URL with every optional value at its
    /// default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL is not a valid http(s) URL.
    pub fn for_base_url(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: parse_base_url(api_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            session_token: None,
            log_format: LogFormat::Text,
        })
    }
}

/// Parse the API base URL, requiring http(s) and normalizing a trailing `/`
/// so relative endpoint paths join underneath it.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid =
        |reason: String| ConfigError::InvalidEnvVar("SOCIETIES_API_URL".to_string(), reason);

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme: {}", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config =
            ClientConfig::from_lookup(lookup(&[("SOCIETIES_API_URL", "https://api.example.com")]))
                .unwrap();
        assert_eq!(config.api_url.as_str(), "https://api.example.com/");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.token_file, PathBuf::from(".societies-token"));
        assert!(config.session_token.is_none());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_missing_api_url() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(var) if var == "SOCIETIES_API_URL"));
    }

    #[test]
    fn test_base_path_gets_trailing_slash() {
        let config =
            ClientConfig::from_lookup(lookup(&[("SOCIETIES_API_URL", "http://localhost:8000/api")]))
                .unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:8000/api/");
        assert_eq!(
            config.api_url.join("societies/update_info").unwrap().as_str(),
            "http://localhost:8000/api/societies/update_info"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err =
            ClientConfig::from_lookup(lookup(&[("SOCIETIES_API_URL", "ftp://example.com")]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_invalid_timeout() {
        for value in ["soon", "0"] {
            let err = ClientConfig::from_lookup(lookup(&[
                ("SOCIETIES_API_URL", "http://localhost"),
                ("SOCIETIES_HTTP_TIMEOUT_SECS", value),
            ]))
            .unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidEnvVar(var, _) if var == "SOCIETIES_HTTP_TIMEOUT_SECS"
            ));
        }
    }

    #[test]
    fn test_optional_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("SOCIETIES_API_URL", "http://localhost"),
            ("SOCIETIES_HTTP_TIMEOUT_SECS", "3"),
            ("SOCIETIES_TOKEN_FILE", "/tmp/tok"),
            ("SOCIETIES_SESSION_TOKEN", "abc"),
            ("SOCIETIES_LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.token_file, PathBuf::from("/tmp/tok"));
        assert!(config.session_token.is_some());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_debug_redacts_session_token() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("SOCIETIES_API_URL", "http://localhost"),
            ("SOCIETIES_SESSION_TOKEN", "super-secret-token"),
        ]))
        .unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret-token"));
    }
}
