//! # AppMetrica Client
//!
//! Async client for the AppMetrica Logs API export endpoint.
//!
//! This crate contains:
//! - The export client and request builder (`export`)
//! - The HTTP request executor with the readiness poll loop (`http`)
//! - The static resource schema registry (`schema`)
//! - Environment-based configuration loading (`config`)
//!
//! ## Architecture
//! - Depends on `appmetrica-domain` for types, errors, and configuration
//! - Contains all "impure" code (network I/O, environment access)
//! - One export call runs one independent poll loop; the client itself is
//!   immutable and safe to share across tasks

pub mod config;
pub mod export;
pub mod http;
pub mod schema;

// Re-export commonly used items
pub use export::{AppMetricaClient, ExportRequest};
pub use http::HttpClient;
