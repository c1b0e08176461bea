//! Logs API export operations
//!
//! This module provides the export client and its request builder. One
//! `export` call validates the request locally, assembles the endpoint URL,
//! headers, and query, polls the remote API until the export file is ready,
//! and decodes the body according to the requested format.

pub mod client;
pub mod request;

// Re-export commonly used items
pub use client::AppMetricaClient;
pub use request::ExportRequest;
