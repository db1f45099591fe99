//! Interview session core
//!
//! This module owns the stateful heart of the service:
//! - `ConversationContext`: the current session's instructions, turns, and
//!   audio references
//! - prompt building: deterministic rendering of the context into the chat
//!   message list the language model expects
//! - `InterviewOrchestrator`: the facade sequencing transcribe, generate, and
//!   synthesize over per-session state, and persisting snapshots at the end

mod context;
mod error;
mod orchestrator;
pub mod prompt;

pub use context::{CandidateProfile, ConversationContext};
pub use error::InterviewError;
pub use orchestrator::{AnswerExchange, InterviewOrchestrator, SessionPhase, StartedInterview};
pub use prompt::{ChatMessage, Role};
