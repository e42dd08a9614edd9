//! Shared utilities for API handlers

pub mod upload;
