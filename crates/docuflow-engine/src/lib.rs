//! Docuflow Engine Library
//!
//! Document intake, in-memory lifecycle tracking, and the simulated
//! analysis pipeline.

pub mod analyzer;
pub mod pipeline;
pub mod store;

// Re-export commonly used types
pub use analyzer::{DocumentAnalyzer, FixedAnalyzer, SimulatedAnalyzer};
pub use pipeline::{IntakeFile, PipelineConfig, ProcessingPipeline};
pub use store::DocumentStore;
