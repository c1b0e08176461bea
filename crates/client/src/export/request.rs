//! Export request value object

use appmetrica_domain::ExportFormat;
use chrono::NaiveDateTime;

/// Parameters of a single export call.
///
/// Built per call, consumed by [`AppMetricaClient::export`], and discarded.
/// Only `resource` and `application_id` are mandatory; everything else has a
/// default or is optional.
///
/// [`AppMetricaClient::export`]: crate::export::AppMetricaClient::export
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub(crate) resource: String,
    pub(crate) application_id: String,
    pub(crate) fields: Option<Vec<String>>,
    pub(crate) date_from: Option<NaiveDateTime>,
    pub(crate) date_to: Option<NaiveDateTime>,
    pub(crate) format: ExportFormat,
    pub(crate) cache_control: Option<String>,
    pub(crate) accept_encoding: Option<String>,
    pub(crate) extra_params: Vec<(String, String)>,
}

impl ExportRequest {
    /// Create a request for `resource` scoped to an application.
    pub fn new(resource: impl Into<String>, application_id: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            application_id: application_id.into(),
            fields: None,
            date_from: None,
            date_to: None,
            format: ExportFormat::default(),
            cache_control: None,
            accept_encoding: None,
            extra_params: Vec::new(),
        }
    }

    /// Select an explicit field list, overriding registry defaulting.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Scope the export to `[from, to]`, second precision.
    pub fn date_range(mut self, from: NaiveDateTime, to: NaiveDateTime) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Select the wire format; defaults to CSV.
    pub fn format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Forward a `Cache-Control` directive; controls whether the remote API
    /// regenerates the export or serves a previously generated file.
    pub fn cache_control(mut self, directive: impl Into<String>) -> Self {
        self.cache_control = Some(directive.into());
        self
    }

    /// Forward an `Accept-Encoding` directive (e.g. `gzip`).
    pub fn accept_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.accept_encoding = Some(encoding.into());
        self
    }

    /// Attach a resource-specific query parameter, forwarded verbatim.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.push((key.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = ExportRequest::new("events", "1111");
        assert_eq!(request.resource, "events");
        assert_eq!(request.application_id, "1111");
        assert_eq!(request.format, ExportFormat::Csv);
        assert!(request.fields.is_none());
        assert!(request.date_from.is_none());
        assert!(request.extra_params.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let request = ExportRequest::new("events", "1111")
            .fields(["event_name", "event_datetime"])
            .format(ExportFormat::Json)
            .cache_control("no-cache")
            .accept_encoding("gzip")
            .param("event_name", "purchase");

        assert_eq!(
            request.fields,
            Some(vec!["event_name".to_string(), "event_datetime".to_string()])
        );
        assert_eq!(request.format, ExportFormat::Json);
        assert_eq!(request.cache_control.as_deref(), Some("no-cache"));
        assert_eq!(request.accept_encoding.as_deref(), Some("gzip"));
        assert_eq!(
            request.extra_params,
            vec![("event_name".to_string(), "purchase".to_string())]
        );
    }
}
