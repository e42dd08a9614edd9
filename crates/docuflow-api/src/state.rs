//! Application state shared across handlers.

use docuflow_core::Config;
use docuflow_engine::{DocumentStore, ProcessingPipeline};

/// Aggregate state handed to the router. The store is the same collection
/// the pipeline mutates; it is exposed directly so read handlers skip the
/// pipeline entirely.
pub struct AppState {
    pub config: Config,
    pub store: DocumentStore,
    pub pipeline: ProcessingPipeline,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
