use crate::constants;
use crate::Error;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for Newslens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewslensConfig {
    /// HTTP server configuration.
    pub http: HttpConfig,

    /// Analysis engine configuration.
    pub engine: EngineConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Host to bind to.
    pub host: String,

    /// Port to bind to.
    pub port: u16,

    /// Enable CORS.
    pub enable_cors: bool,

    /// Allowed CORS origins. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,

    /// Request timeout in seconds. Zero disables the timeout layer.
    pub request_timeout: u64,

    /// Enable request logging.
    pub enable_request_logging: bool,
}

/// Analysis engine configuration.
///
/// The engine is an external executable invoked per request with the fixed
/// arguments followed by the tool id and the input text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Engine executable.
    pub command: String,

    /// Fixed arguments passed before the tool id and input text.
    pub args: Vec<String>,

    /// Working directory for the engine process.
    pub working_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level.
    pub level: LogLevel,

    /// Log format.
    pub format: LogFormat,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level.
    Error,

    /// Warning level.
    Warn,

    /// Info level.
    Info,

    /// Debug level.
    Debug,

    /// Trace level.
    Trace,
}

impl LogLevel {
    /// Stable lowercase name, usable as a filter directive.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact single-line output.
    Text,

    /// Multi-line human-oriented output.
    Pretty,
}

impl NewslensConfig {
    /// Load configuration from file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content).map_err(|e| Error::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Parse(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))
    }
}

/// Default configuration file path (`<config dir>/newslens/config.toml`).
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| Error::Config("Cannot find config directory".to_string()))?;
    Ok(config_dir.join("newslens").join("config.toml"))
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: constants::DEFAULT_HTTP_HOST.to_string(),
            port: constants::DEFAULT_HTTP_PORT,
            enable_cors: true,
            cors_allowed_origins: Vec::new(),
            request_timeout: constants::DEFAULT_REQUEST_TIMEOUT,
            enable_request_logging: true,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command: constants::DEFAULT_ENGINE_COMMAND.to_string(),
            args: vec![constants::DEFAULT_ENGINE_SCRIPT.to_string()],
            working_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Text,
        }
    }
}
