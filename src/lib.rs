pub mod config;
pub mod http;
pub mod interview;
pub mod services;
pub mod snapshot;

pub use config::Config;
pub use http::{create_router, AppState};
pub use interview::{
    AnswerExchange, CandidateProfile, ChatMessage, ConversationContext, InterviewError,
    InterviewOrchestrator, Role, SessionPhase, StartedInterview,
};
pub use services::{
    ChatModel, HttpSpeechSynthesizer, OllamaChatModel, SpeechSynthesizer, Transcriber,
    WhisperTranscriber,
};
pub use snapshot::{InterviewSnapshot, SnapshotScan, SnapshotStore};
