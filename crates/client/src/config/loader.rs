//! Configuration loader
//!
//! Loads export client configuration from environment variables. Defaults
//! come from [`ExportClientConfig::default`]; every variable is an optional
//! override.
//!
//! ## Environment Variables
//! - `APPMETRICA_OAUTH_TOKEN`: OAuth token authorizing export requests
//! - `APPMETRICA_API_ENDPOINT`: Base URL of the export endpoint
//! - `APPMETRICA_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `APPMETRICA_MAX_ATTEMPTS`: Total tries of the poll loop
//! - `APPMETRICA_BASE_BACKOFF_SECS`: Delay before the first retry in seconds
//! - `APPMETRICA_MAX_BACKOFF_SECS`: Upper bound on the backoff delay in seconds

use std::time::Duration;

use appmetrica_domain::{AppmetricaError, ExportClientConfig, Result};

/// Load configuration, applying any `APPMETRICA_*` overrides on top of the
/// defaults.
///
/// # Errors
/// Returns `AppmetricaError::Config` if a set variable has an unparseable
/// value.
pub fn load_from_env() -> Result<ExportClientConfig> {
    let mut config = ExportClientConfig::default();

    if let Ok(endpoint) = std::env::var("APPMETRICA_API_ENDPOINT") {
        config.base_url = endpoint;
    }
    if let Some(timeout) = env_u64("APPMETRICA_TIMEOUT_SECS")? {
        config.timeout = Duration::from_secs(timeout);
    }
    if let Some(attempts) = env_u64("APPMETRICA_MAX_ATTEMPTS")? {
        config.max_attempts = attempts as usize;
    }
    if let Some(backoff) = env_u64("APPMETRICA_BASE_BACKOFF_SECS")? {
        config.base_backoff = Duration::from_secs(backoff);
    }
    if let Some(backoff) = env_u64("APPMETRICA_MAX_BACKOFF_SECS")? {
        config.max_backoff = Duration::from_secs(backoff);
    }

    tracing::debug!(
        base_url = %config.base_url,
        max_attempts = config.max_attempts,
        "configuration loaded from environment"
    );

    Ok(config)
}

/// Read the OAuth token from `APPMETRICA_OAUTH_TOKEN`.
///
/// # Errors
/// Returns `AppmetricaError::Config` if the variable is not set.
pub fn oauth_token_from_env() -> Result<String> {
    std::env::var("APPMETRICA_OAUTH_TOKEN")
        .map_err(|_| AppmetricaError::Config("APPMETRICA_OAUTH_TOKEN is not set".to_string()))
}

fn env_u64(name: &str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|e| AppmetricaError::Config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment access is process-global; each test touches only its own
    // variables so parallel runs cannot race.
    #[test]
    fn test_env_overrides_and_invalid_values() {
        let defaults = load_from_env().expect("defaults");
        assert_eq!(defaults.base_url, "https://api.appmetrica.yandex.ru/logs/v1/export");

        std::env::set_var("APPMETRICA_API_ENDPOINT", "http://localhost:8080/export");
        std::env::set_var("APPMETRICA_MAX_ATTEMPTS", "4");
        let config = load_from_env().expect("config");
        assert_eq!(config.base_url, "http://localhost:8080/export");
        assert_eq!(config.max_attempts, 4);

        std::env::set_var("APPMETRICA_MAX_ATTEMPTS", "not-a-number");
        let result = load_from_env();
        assert!(matches!(result, Err(AppmetricaError::Config(_))));

        std::env::remove_var("APPMETRICA_API_ENDPOINT");
        std::env::remove_var("APPMETRICA_MAX_ATTEMPTS");
    }

    #[test]
    fn test_missing_token_is_a_config_error() {
        std::env::remove_var("APPMETRICA_OAUTH_TOKEN");
        assert!(matches!(oauth_token_from_env(), Err(AppmetricaError::Config(_))));
    }
}
