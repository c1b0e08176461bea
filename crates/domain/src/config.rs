//! Client configuration structures

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_ENDPOINT, DEFAULT_BASE_BACKOFF_SECS, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_MAX_BACKOFF_SECS, DEFAULT_TIMEOUT_SECS,
};

/// Configuration for the export client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportClientConfig {
    /// Base URL of the Logs API export endpoint
    pub base_url: String,
    /// Timeout applied to each individual HTTP request
    pub timeout: Duration,
    /// Total tries of the poll loop (initial request + retries)
    pub max_attempts: usize,
    /// Delay before the first retry; doubles with each retry
    pub base_backoff: Duration,
    /// Upper bound on the backoff delay
    pub max_backoff: Duration,
}

impl Default for ExportClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_backoff: Duration::from_secs(DEFAULT_BASE_BACKOFF_SECS),
            max_backoff: Duration::from_secs(DEFAULT_MAX_BACKOFF_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_logs_api() {
        let config = ExportClientConfig::default();
        assert_eq!(config.base_url, "https://api.appmetrica.yandex.ru/logs/v1/export");
        assert_eq!(config.max_attempts, 10);
        assert!(config.base_backoff < config.max_backoff);
    }
}
