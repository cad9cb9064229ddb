//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `BISTRO_STORAGE_PATH` - cart file path; unset means the cart lives
//!   in memory only (the storage-unavailable degradation)
//! - `BISTRO_BASE_URL` - base URL for the profile endpoint
//!   (default: <http://127.0.0.1:3000>)
//! - `BISTRO_PRICE_POLICY` - `coerce` (default) or `reject` for malformed
//!   menu prices

use std::path::PathBuf;

use bistro_core::PricePolicy;
use thiserror::Error;
use url::Url;

/// Default base URL for the profile endpoint.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Ordering client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Where the cart file lives; `None` means in-memory only.
    pub storage_path: Option<PathBuf>,
    /// Base URL the profile save request is sent to.
    pub base_url: Url,
    /// How malformed menu prices are handled.
    pub price_policy: PricePolicy,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_path = get_optional_env("BISTRO_STORAGE_PATH").map(PathBuf::from);

        let base_url = get_env_or_default("BISTRO_BASE_URL", DEFAULT_BASE_URL);
        let base_url = Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("BISTRO_BASE_URL".to_owned(), e.to_string()))?;

        let price_policy = parse_price_policy(&get_env_or_default("BISTRO_PRICE_POLICY", "coerce"))?;

        Ok(Self {
            storage_path,
            base_url,
            price_policy,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse the price policy setting.
fn parse_price_policy(value: &str) -> Result<PricePolicy, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "coerce" => Ok(PricePolicy::Coerce),
        "reject" => Ok(PricePolicy::Reject),
        other => Err(ConfigError::InvalidEnvVar(
            "BISTRO_PRICE_POLICY".to_owned(),
            format!("expected 'coerce' or 'reject', got {other:?}"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_policy() {
        assert_eq!(parse_price_policy("coerce").unwrap(), PricePolicy::Coerce);
        assert_eq!(parse_price_policy("reject").unwrap(), PricePolicy::Reject);
        assert_eq!(parse_price_policy("REJECT").unwrap(), PricePolicy::Reject);
        assert!(parse_price_policy("maybe").is_err());
    }

    #[test]
    fn test_default_base_url_parses() {
        assert!(Url::parse(DEFAULT_BASE_URL).is_ok());
    }
}
