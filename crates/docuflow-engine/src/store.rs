//! In-memory document collection behind an explicit mutation interface.
//!
//! Records are held newest first and are never removed. All lifecycle
//! transitions go through [`DocumentStore::complete`] and
//! [`DocumentStore::fail`], which touch only the record with the matching
//! id and reject transitions out of a terminal state.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use docuflow_core::models::{
    DocumentListQuery, DocumentRecord, DocumentState, DocumentStats, DocumentStatus, ExtractedData,
};
use docuflow_core::AppError;

/// Reported average processing time. The simulated analyzer has a fixed
/// delay rather than a measured runtime, so this is a display constant.
const AVG_PROCESSING_SECONDS: f64 = 2.3;

#[derive(Clone, Default)]
pub struct DocumentStore {
    records: Arc<RwLock<Vec<DocumentRecord>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a record so iteration order stays reverse-chronological.
    pub async fn insert(&self, record: DocumentRecord) {
        let mut records = self.records.write().await;
        records.insert(0, record);
    }

    /// Transition the matching record from processing to completed.
    pub async fn complete(
        &self,
        id: Uuid,
        extracted: ExtractedData,
        workflow: String,
    ) -> Result<DocumentRecord, AppError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Document not found: {}", id)))?;

        if !record.is_processing() {
            return Err(AppError::InvalidStateTransition(format!(
                "Document {} is already {}",
                id,
                record.status()
            )));
        }

        record.state = DocumentState::Completed {
            extracted,
            workflow,
        };
        Ok(record.clone())
    }

    /// Transition the matching record from processing to failed.
    pub async fn fail(&self, id: Uuid, reason: String) -> Result<DocumentRecord, AppError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Document not found: {}", id)))?;

        if !record.is_processing() {
            return Err(AppError::InvalidStateTransition(format!(
                "Document {} is already {}",
                id,
                record.status()
            )));
        }

        record.state = DocumentState::Failed { reason };
        Ok(record.clone())
    }

    pub async fn get(&self, id: Uuid) -> Option<DocumentRecord> {
        let records = self.records.read().await;
        records.iter().find(|r| r.id == id).cloned()
    }

    /// List records, newest first, with optional status filter and paging.
    pub async fn list(&self, query: &DocumentListQuery) -> Vec<DocumentRecord> {
        let records = self.records.read().await;
        let limit = query.limit.unwrap_or(50).max(0) as usize;
        let offset = query.offset.unwrap_or(0).max(0) as usize;
        records
            .iter()
            .filter(|r| query.status.map_or(true, |s| r.status() == s))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Aggregate counts over every tracked record.
    pub async fn stats(&self) -> DocumentStats {
        let records = self.records.read().await;
        let mut stats = DocumentStats {
            total: records.len() as i64,
            processing: 0,
            completed: 0,
            failed: 0,
            workflows_triggered: 0,
            avg_processing_seconds: AVG_PROCESSING_SECONDS,
        };
        for record in records.iter() {
            match record.status() {
                DocumentStatus::Processing => stats.processing += 1,
                DocumentStatus::Completed => stats.completed += 1,
                DocumentStatus::Failed => stats.failed += 1,
            }
            if record.workflow().is_some() {
                stats.workflows_triggered += 1;
            }
        }
        stats
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extraction(amount: i64) -> ExtractedData {
        ExtractedData {
            vendor: "Acme Corp".to_string(),
            amount,
            date: "2026-08-22".to_string(),
            category: "Office Supplies".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_keeps_newest_first() {
        let store = DocumentStore::new();
        let first = DocumentRecord::new("a.pdf", "application/pdf");
        let second = DocumentRecord::new("b.png", "image/png");
        store.insert(first.clone()).await;
        store.insert(second.clone()).await;

        let listed = store.list(&DocumentListQuery::default()).await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn complete_mutates_only_matching_record() {
        let store = DocumentStore::new();
        let target = DocumentRecord::new("invoice.pdf", "application/pdf");
        let other = DocumentRecord::new("notes.txt", "text/plain");
        store.insert(target.clone()).await;
        store.insert(other.clone()).await;

        let updated = store
            .complete(target.id, extraction(4200), "Manager Approval Required".to_string())
            .await
            .unwrap();
        assert_eq!(updated.id, target.id);
        assert_eq!(updated.status(), DocumentStatus::Completed);

        let untouched = store.get(other.id).await.unwrap();
        assert!(untouched.is_processing());
    }

    #[tokio::test]
    async fn complete_unknown_id_is_not_found() {
        let store = DocumentStore::new();
        let err = store
            .complete(Uuid::new_v4(), extraction(500), "Auto-approved".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn complete_twice_is_rejected() {
        let store = DocumentStore::new();
        let record = DocumentRecord::new("invoice.pdf", "application/pdf");
        store.insert(record.clone()).await;

        store
            .complete(record.id, extraction(500), "Auto-approved".to_string())
            .await
            .unwrap();
        let err = store
            .complete(record.id, extraction(500), "Auto-approved".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidStateTransition(_)));
    }

    #[tokio::test]
    async fn fail_sets_error_status_and_reason() {
        let store = DocumentStore::new();
        let record = DocumentRecord::new("scan.jpg", "image/jpeg");
        store.insert(record.clone()).await;

        let failed = store
            .fail(record.id, "analysis backend unavailable".to_string())
            .await
            .unwrap();
        assert_eq!(failed.status(), DocumentStatus::Failed);
        assert_eq!(failed.status().to_string(), "error");
        assert_eq!(
            failed.failure_reason(),
            Some("analysis backend unavailable")
        );
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let store = DocumentStore::new();
        let done = DocumentRecord::new("a.pdf", "application/pdf");
        let pending = DocumentRecord::new("b.pdf", "application/pdf");
        store.insert(done.clone()).await;
        store.insert(pending.clone()).await;
        store
            .complete(done.id, extraction(200), "Auto-approved".to_string())
            .await
            .unwrap();

        let query = DocumentListQuery {
            status: Some(DocumentStatus::Completed),
            ..DocumentListQuery::default()
        };
        let listed = store.list(&query).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, done.id);

        let query = DocumentListQuery {
            status: Some(DocumentStatus::Processing),
            ..DocumentListQuery::default()
        };
        let listed = store.list(&query).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, pending.id);
    }

    #[tokio::test]
    async fn list_applies_limit_and_offset() {
        let store = DocumentStore::new();
        for i in 0..5 {
            store
                .insert(DocumentRecord::new(format!("doc-{}.pdf", i), "application/pdf"))
                .await;
        }

        let query = DocumentListQuery {
            status: None,
            limit: Some(2),
            offset: Some(1),
        };
        let listed = store.list(&query).await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].filename, "doc-3.pdf");
        assert_eq!(listed[1].filename, "doc-2.pdf");
    }

    #[tokio::test]
    async fn stats_counts_statuses_and_workflows() {
        let store = DocumentStore::new();
        let done = DocumentRecord::new("a.pdf", "application/pdf");
        let broken = DocumentRecord::new("b.pdf", "application/pdf");
        let pending = DocumentRecord::new("c.pdf", "application/pdf");
        store.insert(done.clone()).await;
        store.insert(broken.clone()).await;
        store.insert(pending.clone()).await;
        store
            .complete(done.id, extraction(2500), "Manager Approval Required".to_string())
            .await
            .unwrap();
        store
            .fail(broken.id, "unreadable".to_string())
            .await
            .unwrap();

        let stats = store.stats().await;
        assert_eq!(stats.total, 3);
        assert_eq!(stats.processing, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.workflows_triggered, 1);
        assert_eq!(stats.avg_processing_seconds, 2.3);
    }

    #[tokio::test]
    async fn reads_are_idempotent() {
        let store = DocumentStore::new();
        let record = DocumentRecord::new("a.pdf", "application/pdf");
        store.insert(record.clone()).await;
        store
            .complete(record.id, extraction(300), "Auto-approved".to_string())
            .await
            .unwrap();

        let first = store.get(record.id).await.unwrap();
        let second = store.get(record.id).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(store.len().await, 1);
    }
}
