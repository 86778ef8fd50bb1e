//! Environment driven configuration for the training center API client.

use log::warn;

/// Base URL used when `TRAINCENTER_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const API_URL_ENV: &str = "TRAINCENTER_API_URL";
pub const API_TOKEN_ENV: &str = "TRAINCENTER_API_TOKEN";
pub const API_TIMEOUT_ENV: &str = "TRAINCENTER_API_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Bearer token issued by the session layer, if any.
    pub access_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        ApiConfig {
            base_url: normalize_base_url(base_url).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            ..Default::default()
        }
    }

    pub fn with_access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_URL_ENV)
            .and_then(|v| normalize_base_url(&v))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let access_token = lookup(API_TOKEN_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let timeout_secs = match lookup(API_TIMEOUT_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    warn!(
                        "Ignoring invalid {}='{}', using {}s",
                        API_TIMEOUT_ENV, raw, DEFAULT_TIMEOUT_SECS
                    );
                    DEFAULT_TIMEOUT_SECS
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        ApiConfig {
            base_url,
            access_token,
            timeout_secs,
        }
    }
}

fn normalize_base_url(raw: &str) -> Option<String> {
    Some(raw.trim().trim_end_matches('/').to_string()).filter(|v| !v.is_empty())
}
