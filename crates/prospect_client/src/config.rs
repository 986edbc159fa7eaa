//! Client configuration, env-driven with builder overrides.

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the answering service.
    pub base_url: String,
    /// Per-request deadline. A hung request fails instead of wedging the
    /// conversation in its awaiting state.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Reads `PROSPECT_API_URL` and `PROSPECT_TIMEOUT_SECS`; missing or
    /// unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PROSPECT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = std::env::var("PROSPECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            base_url,
            timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("https://api.example.org").with_timeout(5);
        assert_eq!(config.base_url, "https://api.example.org");
        assert_eq!(config.timeout_secs, 5);
    }
}
