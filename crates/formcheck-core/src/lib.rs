//! Formcheck Core Library
//!
//! This crate provides the configuration, error types, and wire models that
//! are shared between the Formcheck API, the API client, and the CLI.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
