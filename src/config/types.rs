// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub logging: LoggingConfig,
    pub scripts: ScriptsConfig,
    pub server: ServerConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// off, error, warn, info or debug
    pub level: String,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
    /// Emit one access log line per request in serve mode
    pub access_log: bool,
    /// Access log format (combined, common, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "common".to_string()
}

/// Script behaviour
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ScriptsConfig {
    /// Echo parsed calculator inputs before the result line
    pub echo_inputs: bool,
}

/// Development host configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    /// Path prefix under which scripts are exposed
    pub script_prefix: String,
    pub max_body_size: u64,
    /// Per-connection timeout in seconds
    pub request_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "warn".to_string(),
                error_log_file: None,
                access_log: true,
                access_log_format: default_access_log_format(),
            },
            scripts: ScriptsConfig { echo_inputs: true },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: None,
                script_prefix: "/scripts/".to_string(),
                max_body_size: 1024,
                request_timeout: 30,
            },
        }
    }
}
