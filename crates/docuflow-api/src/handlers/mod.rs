pub mod document_get;
pub mod document_upload;
pub mod stats;
