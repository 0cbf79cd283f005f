//! Configuration for the Newslens HTTP API server.

use newslens_core::{constants, NewslensConfig};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Socket address to bind to.
    pub bind_addr: SocketAddr,

    /// Enable CORS.
    pub enable_cors: bool,

    /// Allowed CORS origins. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,

    /// Request timeout in seconds. Zero disables the timeout layer.
    pub request_timeout_seconds: u64,

    /// Enable request logging.
    pub enable_request_logging: bool,

    /// Enable response compression.
    pub enable_compression: bool,

    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], constants::DEFAULT_HTTP_PORT)),
            enable_cors: true,
            cors_allowed_origins: Vec::new(),
            request_timeout_seconds: constants::DEFAULT_REQUEST_TIMEOUT,
            enable_request_logging: true,
            enable_compression: true,
            max_body_size: constants::MAX_BODY_SIZE,
        }
    }
}

impl ApiConfig {
    /// Derive API configuration from the main Newslens configuration.
    pub fn from_core(config: &NewslensConfig) -> newslens_core::Result<Self> {
        let bind_addr = format!("{}:{}", config.http.host, config.http.port)
            .parse()
            .map_err(|e| {
                newslens_core::Error::config(format!(
                    "invalid bind address {}:{}: {}",
                    config.http.host, config.http.port, e
                ))
            })?;

        Ok(Self {
            bind_addr,
            enable_cors: config.http.enable_cors,
            cors_allowed_origins: config.http.cors_allowed_origins.clone(),
            request_timeout_seconds: config.http.request_timeout,
            enable_request_logging: config.http.enable_request_logging,
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_core_carries_http_settings_over() {
        let mut core = NewslensConfig::default();
        core.http.host = "0.0.0.0".to_string();
        core.http.port = 8123;
        core.http.enable_cors = false;

        let api = ApiConfig::from_core(&core).unwrap();
        assert_eq!(api.bind_addr, "0.0.0.0:8123".parse().unwrap());
        assert!(!api.enable_cors);
    }

    #[test]
    fn from_core_rejects_unparseable_hosts() {
        let mut core = NewslensConfig::default();
        core.http.host = "not a host".to_string();
        assert!(ApiConfig::from_core(&core).is_err());
    }
}
