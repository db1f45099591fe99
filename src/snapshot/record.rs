use serde::{Deserialize, Serialize};

/// Immutable record of a completed interview session.
///
/// Identity is the uuid alone; the record carries no timestamps. Created once
/// when a session ends and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSnapshot {
    /// Freshly generated uuid-v4, the sole key of the record.
    pub id: String,

    /// Display title derived from the candidate name and claimed skills.
    pub title: String,

    /// Every interviewer question, in the order asked.
    pub questions: Vec<String>,

    /// Every transcribed candidate response, in the order given.
    pub responses: Vec<String>,

    /// Storage references of the synthesized question audio.
    pub audio_refs: Vec<String>,

    /// The model-generated per-skill assessment with overall score.
    pub summary: String,
}
