//! Configuration loading and management
//!
//! This module provides utilities for loading export client configuration
//! from environment variables.

pub mod loader;

// Re-export commonly used items
pub use loader::{load_from_env, oauth_token_from_env};
