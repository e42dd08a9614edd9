//! Docuflow Core Library
//!
//! Shared domain models, error types, and configuration for the
//! document intake and tracking service.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
