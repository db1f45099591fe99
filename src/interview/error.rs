//! Typed failures surfaced by the orchestrator.

use super::orchestrator::SessionPhase;

/// Errors from the interview pipeline.
///
/// Each pipeline stage maps its failure to one variant, so callers can tell
/// "re-record the answer" apart from "the model endpoint is down". A failed
/// stage never rolls back what earlier stages already recorded.
#[derive(Debug, thiserror::Error)]
pub enum InterviewError {
    #[error("transcription produced no usable text: {0}")]
    Transcription(String),
    #[error("language model request failed: {0}")]
    Generation(String),
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),
    #[error("snapshot not found: {0}")]
    SnapshotNotFound(String),
    #[error("{operation} is not allowed while the session is {phase}")]
    InvalidState {
        operation: &'static str,
        phase: SessionPhase,
    },
    #[error("snapshot storage failed: {0}")]
    Storage(String),
}
