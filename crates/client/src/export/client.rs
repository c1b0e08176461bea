//! Export client for the AppMetrica Logs API
//!
//! Owns the OAuth token and the export endpoint, assembles export requests,
//! and drives them through the polling HTTP client.

use appmetrica_domain::constants::DATE_PARAM_FORMAT;
use appmetrica_domain::{AppmetricaError, ExportClientConfig, ExportData, ExportFormat, Result};
use reqwest::Method;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::request::ExportRequest;
use crate::http::HttpClient;
use crate::schema;

/// Client for the Logs API export endpoint.
///
/// Holds one OAuth token and one base endpoint, both immutable after
/// construction. The client is safe to share across tasks; concurrent
/// `export` calls each run their own independent poll loop.
pub struct AppMetricaClient {
    token: String,
    config: ExportClientConfig,
    http_client: HttpClient,
}

impl AppMetricaClient {
    /// Create a client with the default endpoint and poll configuration.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(token, ExportClientConfig::default())
    }

    /// Create a client with explicit configuration.
    pub fn with_config(token: impl Into<String>, config: ExportClientConfig) -> Result<Self> {
        let http_client = HttpClient::from_config(&config)?;
        Ok(Self { token: token.into(), config, http_client })
    }

    /// Export data from a Logs API resource.
    ///
    /// Validates the request locally (field defaulting, date-range rule),
    /// then polls the export endpoint until the file is ready and decodes
    /// the body according to the requested format.
    ///
    /// # Errors
    ///
    /// * [`AppmetricaError::InvalidInput`] — the resource has no default
    ///   field set and none was given, or a required date range is missing;
    ///   raised before any network call
    /// * [`AppmetricaError::Api`] — the remote API answered with a
    ///   definitive non-success status; carries the response body
    /// * [`AppmetricaError::Network`] — transport-level failure
    /// * [`AppmetricaError::Timeout`] — the export never became ready within
    ///   the configured attempt budget
    /// * [`AppmetricaError::Parse`] — a JSON export body failed to decode
    pub async fn export(&self, request: ExportRequest) -> Result<ExportData> {
        self.export_with_cancel(request, CancellationToken::new()).await
    }

    /// Export with a cancellation token.
    ///
    /// The token aborts the poll loop between attempts (never mid-request)
    /// and surfaces as [`AppmetricaError::Cancelled`].
    pub async fn export_with_cancel(
        &self,
        request: ExportRequest,
        cancel: CancellationToken,
    ) -> Result<ExportData> {
        let url =
            format!("{}/{}.{}", self.config.base_url, request.resource, request.format.as_str());
        let fields = resolve_fields(&request)?;
        let params = build_query(&request, fields)?;

        debug!(
            resource = %request.resource,
            application_id = %request.application_id,
            format = %request.format,
            "starting export"
        );

        let mut builder = self
            .http_client
            .request(Method::GET, &url)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&params);

        if let Some(cache_control) = &request.cache_control {
            builder = builder.header("Cache-Control", cache_control);
        }
        if let Some(accept_encoding) = &request.accept_encoding {
            builder = builder.header("Accept-Encoding", accept_encoding);
        }

        let response = self.http_client.send_with_cancel(builder, &cancel).await?;

        match request.format {
            ExportFormat::Csv => {
                let text = response
                    .text()
                    .await
                    .map_err(|err| AppmetricaError::Network(err.to_string()))?;
                info!(resource = %request.resource, bytes = text.len(), "export complete");
                Ok(ExportData::Csv(text))
            }
            ExportFormat::Json => {
                let value = response
                    .json::<serde_json::Value>()
                    .await
                    .map_err(|err| AppmetricaError::Parse(err.to_string()))?;
                info!(resource = %request.resource, "export complete");
                Ok(ExportData::Json(value))
            }
        }
    }
}

/// Resolve the `fields` query value for a request.
///
/// Explicit fields always win; otherwise the registry's full set for the
/// resource. A resource with neither is not exportable.
fn resolve_fields(request: &ExportRequest) -> Result<String> {
    if !schema::is_exportable(&request.resource) {
        warn!(resource = %request.resource, "resource is not in the documented exportable set");
    }

    if let Some(fields) = &request.fields {
        if fields.is_empty() {
            return Err(AppmetricaError::InvalidInput(
                "explicit field list must not be empty".to_string(),
            ));
        }
        return Ok(fields.join(","));
    }

    match schema::resource_fields(&request.resource) {
        Some(fields) => Ok(fields.join(",")),
        None => Err(AppmetricaError::InvalidInput(format!(
            "Resource {} is not exportable without an explicit field list",
            request.resource
        ))),
    }
}

/// Assemble the query parameters, enforcing the date-range rule.
fn build_query(request: &ExportRequest, fields: String) -> Result<Vec<(String, String)>> {
    let mut params = vec![
        ("application_id".to_string(), request.application_id.clone()),
        ("fields".to_string(), fields),
    ];
    params.extend(request.extra_params.iter().cloned());

    if schema::requires_date_range(&request.resource) {
        match (request.date_from, request.date_to) {
            (Some(from), Some(to)) => {
                params.push((
                    "date_since".to_string(),
                    from.format(DATE_PARAM_FORMAT).to_string(),
                ));
                params.push((
                    "date_until".to_string(),
                    to.format(DATE_PARAM_FORMAT).to_string(),
                ));
            }
            _ => {
                return Err(AppmetricaError::InvalidInput(format!(
                    "Resource {} requires a date range; set both date_from and date_to",
                    request.resource
                )));
            }
        }
    }

    Ok(params)
}
