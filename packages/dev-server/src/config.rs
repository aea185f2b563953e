//! Dev server configuration
//!
//! Read once at startup from environment variables:
//!
//! - `DEV_SERVER_PORT`: listen port (default: 3001)
//! - `DEV_SERVER_HOST`: listen address (default: 127.0.0.1)
//! - `DEV_SERVER_SEED`: create a demo site and page on startup (default: true)
//! - `CORS_ALLOW_ORIGIN`: single allowed origin, replacing the Vite defaults

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Origins allowed when `CORS_ALLOW_ORIGIN` is not set
pub const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:1420",
    "http://localhost:5173",
    "http://localhost:1421",
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid CORS origin '{0}': must be a valid HTTP origin")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DevServerConfig {
    pub port: u16,
    pub host: String,
    pub seed_demo_content: bool,
    pub cors_allow_origin: Option<String>,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            seed_demo_content: true,
            cors_allow_origin: None,
        }
    }
}

impl DevServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; malformed values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("DEV_SERVER_PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid DEV_SERVER_PORT '{}'", raw);
                defaults.port
            }),
            None => defaults.port,
        };

        let host = lookup("DEV_SERVER_HOST")
            .map(|host| host.trim().to_string())
            .filter(|host| !host.is_empty())
            .unwrap_or(defaults.host);

        let seed_demo_content = match lookup("DEV_SERVER_SEED").as_deref().map(str::trim) {
            None => defaults.seed_demo_content,
            Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            Some(other) => {
                tracing::warn!("Ignoring invalid DEV_SERVER_SEED '{}'", other);
                defaults.seed_demo_content
            }
        };

        let cors_allow_origin = lookup("CORS_ALLOW_ORIGIN")
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty());

        Self {
            port,
            host,
            seed_demo_content,
            cors_allow_origin,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Origins the CORS layer accepts
    pub fn cors_origins(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        match &self.cors_allow_origin {
            Some(origin) => origin
                .parse::<HeaderValue>()
                .map(|value| vec![value])
                .map_err(|_| ConfigError::InvalidCorsOrigin(origin.clone())),
            None => Ok(DEFAULT_CORS_ORIGINS
                .iter()
                .map(|origin| HeaderValue::from_static(origin))
                .collect()),
        }
    }
}
