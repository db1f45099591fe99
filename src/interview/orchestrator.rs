use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use super::context::{CandidateProfile, ConversationContext};
use super::error::InterviewError;
use super::prompt;
use crate::services::{ChatModel, SpeechSynthesizer, Transcriber};
use crate::snapshot::SnapshotStore;

/// Lifecycle of one interview session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// No instructions set yet.
    Idle,
    /// Instructions set, zero or more completed turns.
    Active,
    /// Summary produced and snapshot persisted. Requires an explicit reset
    /// before the state can be reused.
    Ended,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Idle => write!(f, "idle"),
            SessionPhase::Active => write!(f, "active"),
            SessionPhase::Ended => write!(f, "ended"),
        }
    }
}

/// One session's phase and conversation state. Single-writer: the per-session
/// mutex is held for the whole pipeline round-trip.
struct InterviewSession {
    phase: SessionPhase,
    context: ConversationContext,
}

impl InterviewSession {
    fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            context: ConversationContext::new(),
        }
    }
}

/// Returned by `start`: the opening question and its synthesized audio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartedInterview {
    pub question: String,
    pub audio_ref: String,
}

/// Returned by `submit_answer`: what was heard, and the next question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerExchange {
    pub transcript: String,
    pub question: String,
    pub audio_ref: String,
}

/// Coordinates the transcribe, generate, synthesize pipeline over per-session
/// conversation state, and persists a snapshot when a session ends.
///
/// Sessions are keyed by a caller-supplied identifier, so concurrent
/// interviews never share state. Each stage commits to the context on its own
/// success; a later-stage failure surfaces as a typed error and preserves the
/// progress of earlier stages.
pub struct InterviewOrchestrator {
    transcriber: Arc<dyn Transcriber>,
    model: Arc<dyn ChatModel>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    store: Arc<SnapshotStore>,
    language: String,
    sessions: RwLock<HashMap<String, Arc<Mutex<InterviewSession>>>>,
}

impl InterviewOrchestrator {
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        model: Arc<dyn ChatModel>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        store: Arc<SnapshotStore>,
        language: String,
    ) -> Self {
        Self {
            transcriber,
            model,
            synthesizer,
            store,
            language,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Begin a session: derive instructions from the profile, ask the model
    /// for the opening question, synthesize it, and return both.
    ///
    /// Valid from `Idle` or `Ended`; starting over an `Active` session fails
    /// with `InvalidState` rather than silently discarding its turns.
    pub async fn start(
        &self,
        session_id: &str,
        profile: CandidateProfile,
    ) -> Result<StartedInterview, InterviewError> {
        let entry = self.entry_or_create(session_id).await;
        let mut session = entry.lock().await;

        if session.phase == SessionPhase::Active {
            return Err(InterviewError::InvalidState {
                operation: "start",
                phase: session.phase,
            });
        }

        session.context.set_instructions(profile);

        let messages = prompt::conversation_messages(&session.context);
        let question = self
            .model
            .generate(&messages)
            .await
            .map_err(|e| InterviewError::Generation(e.to_string()))?;

        session.context.add_question(question.clone());
        session.phase = SessionPhase::Active;
        info!(session_id, "interview started");

        let audio_ref = self
            .synthesizer
            .synthesize(&question)
            .await
            .map_err(|e| InterviewError::Synthesis(e.to_string()))?;
        session.context.add_audio_reference(audio_ref.clone());

        Ok(StartedInterview { question, audio_ref })
    }

    /// Run one answer through the pipeline: transcribe the audio, record the
    /// response, generate and synthesize the next question.
    ///
    /// An empty or failed transcription mutates nothing: the pending question
    /// stays unanswered and the caller may retry with a new recording.
    pub async fn submit_answer(
        &self,
        session_id: &str,
        audio: &[u8],
    ) -> Result<AnswerExchange, InterviewError> {
        let entry = self.require_session(session_id, "submit_answer").await?;
        let mut session = entry.lock().await;

        if session.phase != SessionPhase::Active {
            return Err(InterviewError::InvalidState {
                operation: "submit_answer",
                phase: session.phase,
            });
        }

        let transcript = self
            .transcriber
            .transcribe(audio, &self.language)
            .await
            .map_err(|e| InterviewError::Transcription(e.to_string()))?;
        if transcript.trim().is_empty() {
            return Err(InterviewError::Transcription(
                "the recording contained no recognizable speech".to_string(),
            ));
        }

        session.context.add_response(transcript.clone());

        let messages = prompt::conversation_messages(&session.context);
        let question = self
            .model
            .generate(&messages)
            .await
            .map_err(|e| InterviewError::Generation(e.to_string()))?;
        session.context.add_question(question.clone());

        let audio_ref = self
            .synthesizer
            .synthesize(&question)
            .await
            .map_err(|e| InterviewError::Synthesis(e.to_string()))?;
        session.context.add_audio_reference(audio_ref.clone());

        info!(
            session_id,
            turns = session.context.responses().len(),
            "answer processed"
        );

        Ok(AnswerExchange {
            transcript,
            question,
            audio_ref,
        })
    }

    /// End the session: ask the model for a per-skill summary with an overall
    /// pass/fail score, persist a snapshot, and return the summary.
    ///
    /// The conversation state is deliberately not cleared here; callers can
    /// still read it until they issue an explicit `reset`.
    pub async fn end(&self, session_id: &str) -> Result<String, InterviewError> {
        let entry = self.require_session(session_id, "end").await?;
        let mut session = entry.lock().await;

        if session.phase != SessionPhase::Active {
            return Err(InterviewError::InvalidState {
                operation: "end",
                phase: session.phase,
            });
        }

        let messages = prompt::summary_messages(&session.context);
        let summary = self
            .model
            .generate(&messages)
            .await
            .map_err(|e| InterviewError::Generation(e.to_string()))?;

        let snapshot_id = self
            .store
            .save(&session.context, &summary)
            .await
            .map_err(|e| InterviewError::Storage(e.to_string()))?;

        session.phase = SessionPhase::Ended;
        info!(session_id, %snapshot_id, "interview ended");

        Ok(summary)
    }

    /// Clear the session's conversation state and return it to `Idle`.
    /// Callable from any phase.
    pub async fn reset(&self, session_id: &str) {
        let entry = self.entry_or_create(session_id).await;
        let mut session = entry.lock().await;

        session.context.clear();
        session.phase = SessionPhase::Idle;
        info!(session_id, "session reset");
    }

    /// Current phase of a session. Unknown identifiers read as `Idle`.
    pub async fn phase(&self, session_id: &str) -> SessionPhase {
        let sessions = self.sessions.read().await;
        match sessions.get(session_id) {
            Some(entry) => entry.lock().await.phase,
            None => SessionPhase::Idle,
        }
    }

    /// A copy of the session's conversation state, if the session exists.
    pub async fn context(&self, session_id: &str) -> Option<ConversationContext> {
        let entry = {
            let sessions = self.sessions.read().await;
            sessions.get(session_id).cloned()
        }?;
        let session = entry.lock().await;
        Some(session.context.clone())
    }

    async fn entry_or_create(&self, session_id: &str) -> Arc<Mutex<InterviewSession>> {
        let mut sessions = self.sessions.write().await;
        Arc::clone(
            sessions
                .entry(session_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(InterviewSession::new()))),
        )
    }

    async fn require_session(
        &self,
        session_id: &str,
        operation: &'static str,
    ) -> Result<Arc<Mutex<InterviewSession>>, InterviewError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .cloned()
            .ok_or(InterviewError::InvalidState {
                operation,
                phase: SessionPhase::Idle,
            })
    }
}
