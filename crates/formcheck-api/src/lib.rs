//! Formcheck API Library
//!
//! HTTP handlers, error conversion, and application setup for the exercise
//! analysis service.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
