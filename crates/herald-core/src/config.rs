//! Configuration types shared across Herald components.

use std::time::Duration;

/// HTTP client configuration for feed retrieval and Telegram calls.
pub struct HttpConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "Herald/0.1 (rss-poster-bot)".to_string(),
        }
    }
}

impl HttpConfig {
    /// The configured timeout in whole seconds, for error reporting.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout.as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_config_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.timeout_secs(), 30);
        assert!(config.user_agent.starts_with("Herald/"));
    }
}
