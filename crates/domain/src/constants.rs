//! Domain constants
//!
//! Centralized location for the defaults shared by the export client and its
//! configuration.

/// Base endpoint of the AppMetrica Logs API export service.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.appmetrica.yandex.ru/logs/v1/export";

/// Format required by the `date_since` / `date_until` query parameters.
pub const DATE_PARAM_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Request executor defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;
pub const DEFAULT_BASE_BACKOFF_SECS: u64 = 10;
pub const DEFAULT_MAX_BACKOFF_SECS: u64 = 300;
