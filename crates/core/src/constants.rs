//! Application constants and configuration defaults.

/// Default HTTP server port.
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Default HTTP bind host.
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default analysis engine executable.
pub const DEFAULT_ENGINE_COMMAND: &str = "python";

/// Default fixed argument passed to the engine ahead of the tool id.
pub const DEFAULT_ENGINE_SCRIPT: &str = "analyze.py";

/// Default HTTP request timeout in seconds. Engine invocations can involve
/// remote model inference, so the bound is generous.
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 120;

/// Maximum request body size in bytes.
pub const MAX_BODY_SIZE: usize = 1024 * 1024;
