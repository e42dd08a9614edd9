//! Intake pipeline: creates records and schedules their deferred completion.
//!
//! Every ingested file gets one scheduled task that sleeps for the
//! configured delay, runs the analyzer, and applies the completion
//! transition. Tasks are tracked by record id so a pending completion can
//! be aborted; [`ProcessingPipeline::shutdown`] aborts everything still
//! scheduled. Cancelling a completion that already ran is a no-op.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use uuid::Uuid;

use docuflow_core::models::DocumentRecord;

use crate::analyzer::{workflow_for_amount, DocumentAnalyzer};
use crate::store::DocumentStore;

/// One accepted file entering the tracker. Content is drained at the
/// transport layer and never retained; only the metadata travels further.
#[derive(Debug, Clone)]
pub struct IntakeFile {
    pub filename: String,
    pub content_type: String,
}

#[derive(Clone)]
pub struct PipelineConfig {
    /// Delay between intake and the completion transition.
    pub processing_delay: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(3000),
        }
    }
}

#[derive(Clone)]
pub struct ProcessingPipeline {
    store: DocumentStore,
    analyzer: Arc<dyn DocumentAnalyzer>,
    config: PipelineConfig,
    scheduled: Arc<Mutex<HashMap<Uuid, JoinHandle<()>>>>,
}

impl ProcessingPipeline {
    pub fn new(
        store: DocumentStore,
        analyzer: Arc<dyn DocumentAnalyzer>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            store,
            analyzer,
            config,
            scheduled: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Create a processing record for each accepted file and schedule its
    /// deferred completion. Records are prepended one at a time, so the
    /// tracked collection lists the last file of a batch first. Returns
    /// the created records in intake order.
    #[tracing::instrument(skip(self, files), fields(batch_size = files.len()))]
    pub async fn ingest(&self, files: Vec<IntakeFile>) -> Vec<DocumentRecord> {
        let mut created = Vec::with_capacity(files.len());
        for file in files {
            let record = DocumentRecord::new(file.filename, file.content_type);
            self.store.insert(record.clone()).await;
            self.schedule_completion(&record).await;
            tracing::info!(
                document_id = %record.id,
                filename = %record.filename,
                content_type = %record.content_type,
                "Document accepted for processing"
            );
            created.push(record);
        }
        created
    }

    async fn schedule_completion(&self, record: &DocumentRecord) {
        let id = record.id;
        let filename = record.filename.clone();
        let content_type = record.content_type.clone();
        let store = self.store.clone();
        let analyzer = self.analyzer.clone();
        let delay = self.config.processing_delay;
        let registry = self.scheduled.clone();

        // Hold the lock across the spawn so the task cannot deregister
        // itself before it has been registered.
        let mut scheduled = self.scheduled.lock().await;
        let handle = tokio::spawn(async move {
            sleep(delay).await;

            match analyzer.analyze(&filename, &content_type).await {
                Ok(extracted) => {
                    let workflow = workflow_for_amount(extracted.amount);
                    let amount = extracted.amount;
                    match store.complete(id, extracted, workflow.to_string()).await {
                        Ok(_) => {
                            tracing::info!(
                                document_id = %id,
                                amount,
                                workflow,
                                "Document analysis completed"
                            );
                        }
                        Err(e) => {
                            tracing::warn!(
                                document_id = %id,
                                error = %e,
                                "Completion transition skipped"
                            );
                        }
                    }
                }
                Err(e) => {
                    tracing::error!(document_id = %id, error = %e, "Document analysis failed");
                    if let Err(e) = store.fail(id, e.to_string()).await {
                        tracing::warn!(
                            document_id = %id,
                            error = %e,
                            "Failure transition skipped"
                        );
                    }
                }
            }

            registry.lock().await.remove(&id);
        });
        scheduled.insert(id, handle);
    }

    /// Abort a pending completion. Returns true when a task was still
    /// scheduled for the id.
    pub async fn cancel(&self, id: Uuid) -> bool {
        match self.scheduled.lock().await.remove(&id) {
            Some(handle) => {
                handle.abort();
                tracing::debug!(document_id = %id, "Cancelled scheduled completion");
                true
            }
            None => false,
        }
    }

    /// Number of completions still scheduled.
    pub async fn scheduled_len(&self) -> usize {
        self.scheduled.lock().await.len()
    }

    /// Abort every pending completion. Records keep their current state.
    pub async fn shutdown(&self) {
        let mut scheduled = self.scheduled.lock().await;
        let aborted = scheduled.len();
        for (_, handle) in scheduled.drain() {
            handle.abort();
        }
        if aborted > 0 {
            tracing::info!(aborted, "Aborted pending completions");
        }
    }
}
