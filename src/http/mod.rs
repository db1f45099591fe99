//! HTTP API server for the interview frontend
//!
//! This module provides a REST API mapping 1:1 onto orchestrator operations:
//! - POST /sessions/:id/start - Begin an interview from a candidate profile
//! - POST /sessions/:id/answer - Submit one spoken answer (multipart audio)
//! - POST /sessions/:id/end - End the interview and get the summary
//! - POST /sessions/:id/reset - Clear the session state
//! - GET /interviews - List persisted snapshots
//! - GET /interviews/:id - Get a snapshot by identifier
//! - GET /audio/:file - Download synthesized question audio
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
