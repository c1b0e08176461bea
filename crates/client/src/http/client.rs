use std::time::Duration;

use appmetrica_domain::constants::{
    DEFAULT_BASE_BACKOFF_SECS, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_BACKOFF_SECS,
    DEFAULT_TIMEOUT_SECS,
};
use appmetrica_domain::{AppmetricaError, ExportClientConfig, Result};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// HTTP client that drives the Logs API readiness poll.
///
/// The export endpoint answers 200 when the requested file is ready and
/// 201/202 while it is still being prepared. `send` re-issues the identical
/// GET with exponentially growing delays until the export is ready, the
/// attempt budget is spent, or the caller cancels. Every other status and
/// any transport failure is terminal on first occurrence.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    base_backoff: Duration,
    max_backoff: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Construct a client from an [`ExportClientConfig`].
    pub fn from_config(config: &ExportClientConfig) -> Result<Self> {
        Self::builder()
            .timeout(config.timeout)
            .max_attempts(config.max_attempts)
            .base_backoff(config.base_backoff)
            .max_backoff(config.max_backoff)
            .build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder, polling until the export is ready.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        self.send_with_cancel(builder, &CancellationToken::new()).await
    }

    /// Execute with a cancellation token that aborts the poll between attempts.
    pub async fn send_with_cancel(
        &self,
        builder: RequestBuilder,
        cancel: &CancellationToken,
    ) -> Result<Response> {
        let attempts = self.max_attempts.max(1);

        for attempt in 0..attempts {
            if cancel.is_cancelled() {
                return Err(AppmetricaError::Cancelled);
            }

            let cloned_builder = builder.try_clone().ok_or_else(|| {
                AppmetricaError::InvalidInput(
                    "request body cannot be cloned; buffer the body to enable retries".into(),
                )
            })?;

            let request = cloned_builder
                .build()
                .map_err(|err| AppmetricaError::InvalidInput(err.to_string()))?;

            let method = request.method().clone();
            let url = request.url().clone();
            debug!(attempt = attempt + 1, %method, %url, "sending export request");

            match self.client.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt = attempt + 1, %url, %status, "received export response");

                    if status == StatusCode::OK {
                        return Ok(response);
                    }

                    if status == StatusCode::CREATED || status == StatusCode::ACCEPTED {
                        if attempt + 1 < attempts {
                            debug!(attempt = attempt + 1, %url, "export still preparing");
                            self.sleep_with_backoff(attempt + 1, cancel).await?;
                            continue;
                        }
                        warn!(%url, attempts, "export never became ready");
                        return Err(AppmetricaError::Timeout { attempts });
                    }

                    let body = response.text().await.unwrap_or_default();
                    return Err(AppmetricaError::Api { status: status.as_u16(), body });
                }
                Err(err) => {
                    debug!(attempt = attempt + 1, %url, error = %err, "export request failed");
                    return Err(AppmetricaError::Network(err.to_string()));
                }
            }
        }

        Err(AppmetricaError::Timeout { attempts })
    }

    fn backoff_delay(&self, retry_number: usize) -> Duration {
        let shift = retry_number.saturating_sub(1).min(8) as u32;
        let delay = self.base_backoff.saturating_mul(1 << shift);
        delay.min(self.max_backoff)
    }

    async fn sleep_with_backoff(
        &self,
        retry_number: usize,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let delay = self.backoff_delay(retry_number);
        if delay.is_zero() {
            return Ok(());
        }
        tokio::select! {
            _ = cancel.cancelled() => Err(AppmetricaError::Cancelled),
            _ = tokio::time::sleep(delay) => Ok(()),
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: usize,
    base_backoff: Duration,
    max_backoff: Duration,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_backoff: Duration::from_secs(DEFAULT_BASE_BACKOFF_SECS),
            max_backoff: Duration::from_secs(DEFAULT_MAX_BACKOFF_SECS),
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure the total number of attempts (initial try + retries).
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    pub fn max_backoff(mut self, backoff: Duration) -> Self {
        self.max_backoff = backoff;
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .no_proxy()
            .build()
            .map_err(|err| AppmetricaError::Config(err.to_string()))?;

        Ok(HttpClient {
            client,
            max_attempts: self.max_attempts.max(1),
            base_backoff: self.base_backoff,
            max_backoff: self.max_backoff,
        })
    }
}
