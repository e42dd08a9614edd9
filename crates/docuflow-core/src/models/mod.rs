//! Data models for the application

mod document;

pub use document::*;
