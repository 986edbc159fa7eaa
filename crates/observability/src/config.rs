//! Configuration for logging/telemetry

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name included in every log line (e.g., "prospect-cli")
    pub service_name: String,

    /// Log level filter (e.g., "info", "debug", "trace")
    /// Defaults to "warn" if not set; a chat client should be quiet by default
    pub log_level: Option<String>,

    /// Emit ANSI color codes in log output
    pub ansi: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "prospect".to_string(),
            log_level: None,
            ansi: true,
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Enable or disable ANSI colors in log output
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Build from environment variables
    ///
    /// Reads `PROSPECT_LOG` or `RUST_LOG` for the level filter.
    pub fn from_env() -> Self {
        let log_level = std::env::var("PROSPECT_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();

        Self {
            service_name: "prospect".to_string(),
            log_level,
            ansi: true,
        }
    }
}
