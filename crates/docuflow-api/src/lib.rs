//! Docuflow API Library
//!
//! This crate provides the HTTP API handlers, routing, and application setup.

// Module declarations
mod api_doc;
pub mod constants;
mod handlers;
pub mod setup;
mod telemetry;
mod utils;
mod validation;

// Public modules
pub mod error;
pub mod state;

// Re-exports
pub use docuflow_engine::{DocumentStore, ProcessingPipeline};
pub use error::ErrorResponse;
