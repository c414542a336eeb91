//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use url::Url;

use crate::api::CorsPolicy;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Cross-Origin Policy ===
    /// Origins allowed to read responses (comma-separated in the environment).
    #[serde(default = "default_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Whether browsers may send credentials with cross-origin requests.
    #[serde(default = "default_true")]
    pub cors_allow_credentials: bool,

    // === Observability ===
    /// Port for the Prometheus exporter. Disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allowed_origins: default_allowed_origins(),
            cors_allow_credentials: default_true(),
            metrics_port: None,
            rust_log: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        self.host
            .parse::<IpAddr>()
            .map_err(|_| format!("HOST must be an IP address, got `{}`", self.host))?;

        let origins = self.origins();
        if origins.is_empty() {
            return Err("CORS_ALLOWED_ORIGINS must list at least one origin".to_string());
        }

        for origin in &origins {
            if *origin == "*" {
                if self.cors_allow_credentials {
                    return Err(
                        "CORS_ALLOWED_ORIGINS cannot be `*` when CORS_ALLOW_CREDENTIALS is true"
                            .to_string(),
                    );
                }
                continue;
            }
            validate_origin(origin)?;
        }

        if self.metrics_port == Some(self.port) {
            return Err("METRICS_PORT must differ from PORT".to_string());
        }

        Ok(())
    }

    /// Resolve the listen address.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|_| format!("HOST must be an IP address, got `{}`", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Address the Prometheus exporter listens on, if enabled.
    pub fn metrics_addr(&self) -> Option<SocketAddr> {
        let port = self.metrics_port?;
        let ip = self.host.parse::<IpAddr>().ok()?;
        Some(SocketAddr::new(ip, port))
    }

    /// Cross-origin policy for the router.
    pub fn cors_policy(&self) -> CorsPolicy {
        CorsPolicy {
            allowed_origins: self.origins().into_iter().map(str::to_string).collect(),
            allow_credentials: self.cors_allow_credentials,
        }
    }

    fn origins(&self) -> Vec<&str> {
        self.cors_allowed_origins
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .collect()
    }
}

/// Browsers send `Origin` as `scheme://host[:port]` with no path, so anything
/// else would never match.
fn validate_origin(origin: &str) -> Result<(), String> {
    let url = Url::parse(origin).map_err(|e| format!("invalid origin `{origin}`: {e}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("origin `{origin}` must use http or https"));
    }

    let serialized = url.origin().ascii_serialization();
    if serialized != origin {
        return Err(format!("origin `{origin}` is not a bare origin, expected `{serialized}`"));
    }

    Ok(())
}
