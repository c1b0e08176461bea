//! HTTP request execution
//!
//! This module provides the HTTP client that executes export requests,
//! polling the Logs API until the requested file is ready.

pub mod client;

// Re-export commonly used items
pub use client::{HttpClient, HttpClientBuilder};
