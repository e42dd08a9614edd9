use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Flat lifecycle status reported on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Processing,
    Completed,
    /// Serialized as `error` on the wire.
    #[serde(rename = "error")]
    Failed,
}

impl Display for DocumentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DocumentStatus::Processing => write!(f, "processing"),
            DocumentStatus::Completed => write!(f, "completed"),
            DocumentStatus::Failed => write!(f, "error"),
        }
    }
}

impl FromStr for DocumentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(DocumentStatus::Processing),
            "completed" => Ok(DocumentStatus::Completed),
            "error" => Ok(DocumentStatus::Failed),
            _ => Err(anyhow::anyhow!("Invalid document status: {}", s)),
        }
    }
}

/// Fields produced by document analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExtractedData {
    pub vendor: String,
    /// Whole currency units, no fractional part.
    pub amount: i64,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    pub category: String,
}

/// Lifecycle state of a tracked document.
///
/// `Failed` carries the failure reason and maps to the wire status
/// `error`. The shipped analyzer never fails, so this state is only
/// reached when a real analysis backend reports an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DocumentState {
    Processing,
    Completed {
        extracted: ExtractedData,
        workflow: String,
    },
    Failed {
        reason: String,
    },
}

impl DocumentState {
    pub fn status(&self) -> DocumentStatus {
        match self {
            DocumentState::Processing => DocumentStatus::Processing,
            DocumentState::Completed { .. } => DocumentStatus::Completed,
            DocumentState::Failed { .. } => DocumentStatus::Failed,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, DocumentState::Processing)
    }
}

/// One tracked document.
///
/// `filename` and `content_type` are copied verbatim from the uploaded
/// part at intake. File content is never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: Uuid,
    pub filename: String,
    pub content_type: String,
    pub state: DocumentState,
    pub uploaded_at: DateTime<Utc>,
}

impl DocumentRecord {
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename: filename.into(),
            content_type: content_type.into(),
            state: DocumentState::Processing,
            uploaded_at: Utc::now(),
        }
    }

    pub fn status(&self) -> DocumentStatus {
        self.state.status()
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.state, DocumentState::Processing)
    }

    pub fn extracted(&self) -> Option<&ExtractedData> {
        match &self.state {
            DocumentState::Completed { extracted, .. } => Some(extracted),
            _ => None,
        }
    }

    pub fn workflow(&self) -> Option<&str> {
        match &self.state {
            DocumentState::Completed { workflow, .. } => Some(workflow),
            _ => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match &self.state {
            DocumentState::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Response models for API endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub filename: String,
    pub content_type: String,
    pub status: DocumentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_data: Option<ExtractedData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_triggered: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl From<DocumentRecord> for DocumentResponse {
    fn from(record: DocumentRecord) -> Self {
        let status = record.status();
        let (extracted_data, workflow_triggered, failure_reason) = match record.state {
            DocumentState::Processing => (None, None, None),
            DocumentState::Completed {
                extracted,
                workflow,
            } => (Some(extracted), Some(workflow), None),
            DocumentState::Failed { reason } => (None, None, Some(reason)),
        };
        Self {
            id: record.id,
            filename: record.filename,
            content_type: record.content_type,
            status,
            extracted_data,
            workflow_triggered,
            failure_reason,
            uploaded_at: record.uploaded_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentStats {
    pub total: i64,
    pub processing: i64,
    pub completed: i64,
    pub failed: i64,
    pub workflows_triggered: i64,
    pub avg_processing_seconds: f64,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct DocumentListQuery {
    pub status: Option<DocumentStatus>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Default for DocumentListQuery {
    fn default() -> Self {
        Self {
            status: None,
            limit: Some(50),
            offset: Some(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_state() -> DocumentState {
        DocumentState::Completed {
            extracted: ExtractedData {
                vendor: "Acme Corp".to_string(),
                amount: 1200,
                date: "2026-08-22".to_string(),
                category: "Office Supplies".to_string(),
            },
            workflow: "Manager Approval Required".to_string(),
        }
    }

    #[test]
    fn test_document_status_display() {
        assert_eq!(DocumentStatus::Processing.to_string(), "processing");
        assert_eq!(DocumentStatus::Completed.to_string(), "completed");
        assert_eq!(DocumentStatus::Failed.to_string(), "error");
    }

    #[test]
    fn test_document_status_from_str() {
        assert_eq!(
            "processing".parse::<DocumentStatus>().unwrap(),
            DocumentStatus::Processing
        );
        assert_eq!(
            "completed".parse::<DocumentStatus>().unwrap(),
            DocumentStatus::Completed
        );
        assert_eq!(
            "error".parse::<DocumentStatus>().unwrap(),
            DocumentStatus::Failed
        );
        assert!("failed".parse::<DocumentStatus>().is_err());
        assert!("invalid_status".parse::<DocumentStatus>().is_err());
    }

    #[test]
    fn test_document_status_serializes_failed_as_error() {
        let json = serde_json::to_string(&DocumentStatus::Failed).unwrap();
        assert_eq!(json, "\"error\"");
        let parsed: DocumentStatus = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, DocumentStatus::Failed);
    }

    #[test]
    fn test_document_state_status() {
        assert_eq!(DocumentState::Processing.status(), DocumentStatus::Processing);
        assert_eq!(completed_state().status(), DocumentStatus::Completed);
        assert_eq!(
            DocumentState::Failed {
                reason: "analysis backend unavailable".to_string()
            }
            .status(),
            DocumentStatus::Failed
        );
    }

    #[test]
    fn test_new_record_starts_processing() {
        let record = DocumentRecord::new("invoice.pdf", "application/pdf");
        assert_eq!(record.filename, "invoice.pdf");
        assert_eq!(record.content_type, "application/pdf");
        assert!(record.is_processing());
        assert_eq!(record.status(), DocumentStatus::Processing);
        assert!(record.extracted().is_none());
        assert!(record.workflow().is_none());
    }

    #[test]
    fn test_completed_record_accessors() {
        let mut record = DocumentRecord::new("invoice.pdf", "application/pdf");
        record.state = completed_state();
        assert!(record.state.is_terminal());
        assert_eq!(record.extracted().unwrap().vendor, "Acme Corp");
        assert_eq!(record.extracted().unwrap().amount, 1200);
        assert_eq!(record.workflow(), Some("Manager Approval Required"));
        assert!(record.failure_reason().is_none());
    }

    #[test]
    fn test_response_for_processing_record() {
        let record = DocumentRecord::new("scan.png", "image/png");
        let response = DocumentResponse::from(record.clone());
        assert_eq!(response.id, record.id);
        assert_eq!(response.status, DocumentStatus::Processing);
        assert!(response.extracted_data.is_none());
        assert!(response.workflow_triggered.is_none());

        // Optional fields are omitted entirely while processing
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("extracted_data").is_none());
        assert!(json.get("workflow_triggered").is_none());
        assert!(json.get("failure_reason").is_none());
    }

    #[test]
    fn test_response_for_completed_record() {
        let mut record = DocumentRecord::new("invoice.pdf", "application/pdf");
        record.state = completed_state();
        let response = DocumentResponse::from(record);
        assert_eq!(response.status, DocumentStatus::Completed);
        assert_eq!(response.extracted_data.unwrap().category, "Office Supplies");
        assert_eq!(
            response.workflow_triggered.as_deref(),
            Some("Manager Approval Required")
        );
        assert!(response.failure_reason.is_none());
    }

    #[test]
    fn test_response_for_failed_record() {
        let mut record = DocumentRecord::new("notes.txt", "text/plain");
        record.state = DocumentState::Failed {
            reason: "analysis backend unavailable".to_string(),
        };
        let response = DocumentResponse::from(record);
        assert_eq!(response.status, DocumentStatus::Failed);
        assert!(response.extracted_data.is_none());
        assert!(response.workflow_triggered.is_none());
        assert_eq!(
            response.failure_reason.as_deref(),
            Some("analysis backend unavailable")
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "error");
    }

    #[test]
    fn test_list_query_defaults() {
        let query = DocumentListQuery::default();
        assert!(query.status.is_none());
        assert_eq!(query.limit, Some(50));
        assert_eq!(query.offset, Some(0));
    }
}
