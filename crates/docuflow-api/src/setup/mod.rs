//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use docuflow_core::Config;
use docuflow_engine::{DocumentStore, PipelineConfig, ProcessingPipeline, SimulatedAnalyzer};
use std::sync::Arc;

/// Initialize the entire application
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    // Initialize telemetry first
    crate::telemetry::init_telemetry();

    tracing::info!("Configuration loaded and validated successfully");

    let store = DocumentStore::new();
    let pipeline = ProcessingPipeline::new(
        store.clone(),
        Arc::new(SimulatedAnalyzer),
        PipelineConfig {
            processing_delay: config.processing_delay(),
        },
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        pipeline,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
