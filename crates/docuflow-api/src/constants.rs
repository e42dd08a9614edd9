//! API constants
//!
//! This module defines constants used throughout the API, including versioning.

/// API base path prefix (version-independent)
pub const API_BASE: &str = "/api";

/// Current API version segment
pub const API_VERSION: &str = "v0";

/// Versioned prefix for all document endpoints
pub const API_PREFIX: &str = "/api/v0";
