//! Client configuration, loadable from TOML or environment.

use serde::Deserialize;

/// Configuration for a Sema API client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// API key sent in the `api-key` header. Required.
    pub api_key: String,
    /// Service hostname.
    #[serde(default = "default_hostname")]
    pub hostname: String,
    /// API version path segment.
    #[serde(default = "default_version")]
    pub version: String,
    /// Verify the service TLS certificate. Disable only against local mocks.
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_hostname() -> String {
    "api.sema.dev".into()
}
fn default_version() -> String {
    "v1".into()
}
fn default_tls_verify() -> bool {
    true
}
fn default_timeout_secs() -> u64 {
    30
}

impl ClientConfig {
    /// Config with defaults for everything but the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            hostname: default_hostname(),
            version: default_version(),
            tls_verify: default_tls_verify(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config from environment variables (`SEMA_API_KEY`,
    /// `SEMA_HOSTNAME`, `SEMA_VERSION`, `SEMA_TIMEOUT_SECS`).
    pub fn from_env() -> Self {
        let api_key = std::env::var("SEMA_API_KEY").unwrap_or_default();
        let mut config = Self::new(api_key);
        if let Ok(hostname) = std::env::var("SEMA_HOSTNAME") {
            config.hostname = hostname;
        }
        if let Ok(version) = std::env::var("SEMA_VERSION") {
            config.version = version;
        }
        if let Some(secs) = std::env::var("SEMA_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.timeout_secs = secs;
        }
        config
    }

    /// Base URL for API calls, e.g. `https://api.sema.dev/v1`.
    pub fn base_url(&self) -> String {
        // Scheme-qualified hostnames pass through untouched (test servers).
        if self.hostname.starts_with("http://") || self.hostname.starts_with("https://") {
            format!("{}/{}", self.hostname.trim_end_matches('/'), self.version)
        } else {
            format!("https://{}/{}", self.hostname, self.version)
        }
    }
}
