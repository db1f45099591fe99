use std::sync::Arc;

use crate::interview::InterviewOrchestrator;
use crate::snapshot::SnapshotStore;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Session orchestrator (holds the session_id → conversation state map)
    pub orchestrator: Arc<InterviewOrchestrator>,

    /// Persisted interview snapshots
    pub snapshots: Arc<SnapshotStore>,
}

impl AppState {
    pub fn new(orchestrator: Arc<InterviewOrchestrator>, snapshots: Arc<SnapshotStore>) -> Self {
        Self {
            orchestrator,
            snapshots,
        }
    }
}
