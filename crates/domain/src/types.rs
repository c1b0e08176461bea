//! Common data types used by the export client

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppmetricaError;

/// Wire format of an export, selected by the endpoint path suffix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// Path suffix used when building the export URL
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = AppmetricaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => {
                Err(AppmetricaError::InvalidInput(format!("Unknown export format: {other}")))
            }
        }
    }
}

/// Payload returned by a completed export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExportData {
    /// Raw response body, returned verbatim
    Csv(String),
    /// Parsed JSON document
    Json(serde_json::Value),
}

impl ExportData {
    /// Borrow the raw CSV text, if this export was requested as CSV.
    pub fn as_csv(&self) -> Option<&str> {
        match self {
            Self::Csv(text) => Some(text),
            Self::Json(_) => None,
        }
    }

    /// Borrow the parsed JSON document, if this export was requested as JSON.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Csv(_) => None,
        }
    }

    /// Consume the export and return the raw CSV text.
    pub fn into_csv(self) -> Option<String> {
        match self {
            Self::Csv(text) => Some(text),
            Self::Json(_) => None,
        }
    }

    /// Consume the export and return the parsed JSON document.
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Csv(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults_to_csv() {
        assert_eq!(ExportFormat::default(), ExportFormat::Csv);
    }

    #[test]
    fn test_format_parses_recognized_values() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_format_path_suffix() {
        assert_eq!(ExportFormat::Csv.to_string(), "csv");
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_export_data_accessors() {
        let csv = ExportData::Csv("a,b\n1,2".to_string());
        assert_eq!(csv.as_csv(), Some("a,b\n1,2"));
        assert!(csv.as_json().is_none());

        let json = ExportData::Json(serde_json::json!({"data": []}));
        assert!(json.as_csv().is_none());
        assert_eq!(json.into_json(), Some(serde_json::json!({"data": []})));
    }
}
