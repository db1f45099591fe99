use super::state::AppState;
use crate::interview::{CandidateProfile, InterviewError};
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StartInterviewResponse {
    pub question: String,
    pub audio: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitAnswerResponse {
    pub transcript: String,
    pub question: String,
    pub audio: String,
}

#[derive(Debug, Serialize)]
pub struct EndInterviewResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a pipeline failure to the status a client can act on: 422 means
/// re-record, 502 means a backing service is down, 409 means wrong phase.
fn interview_error_response(err: InterviewError) -> Response {
    let status = match &err {
        InterviewError::Transcription(_) => StatusCode::UNPROCESSABLE_ENTITY,
        InterviewError::Generation(_) | InterviewError::Synthesis(_) => StatusCode::BAD_GATEWAY,
        InterviewError::InvalidState { .. } => StatusCode::CONFLICT,
        InterviewError::SnapshotNotFound(_) => StatusCode::NOT_FOUND,
        InterviewError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /sessions/:session_id/start
/// Start an interview: the JSON body is the candidate profile
pub async fn start_interview(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(profile): Json<CandidateProfile>,
) -> impl IntoResponse {
    info!("Starting interview session: {}", session_id);

    match state.orchestrator.start(&session_id, profile).await {
        Ok(started) => (
            StatusCode::OK,
            Json(StartInterviewResponse {
                question: started.question,
                audio: started.audio_ref,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to start session {}: {}", session_id, e);
            interview_error_response(e)
        }
    }
}

/// POST /sessions/:session_id/answer
/// Submit one spoken answer as a multipart audio upload
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    // Take the first uploaded field as the audio sample
    let audio = loop {
        match multipart.next_field().await {
            Ok(Some(field)) => match field.bytes().await {
                Ok(bytes) if !bytes.is_empty() => break bytes,
                Ok(_) => continue,
                Err(e) => {
                    error!("Failed to read audio upload: {}", e);
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read audio upload: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            Ok(None) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "No audio file in request".to_string(),
                    }),
                )
                    .into_response();
            }
            Err(e) => {
                error!("Malformed multipart body: {}", e);
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Malformed multipart body: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    };

    match state.orchestrator.submit_answer(&session_id, &audio).await {
        Ok(exchange) => (
            StatusCode::OK,
            Json(SubmitAnswerResponse {
                transcript: exchange.transcript,
                question: exchange.question,
                audio: exchange.audio_ref,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to process answer for {}: {}", session_id, e);
            interview_error_response(e)
        }
    }
}

/// POST /sessions/:session_id/end
/// End the interview and return the generated summary
pub async fn end_interview(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    info!("Ending interview session: {}", session_id);

    match state.orchestrator.end(&session_id).await {
        Ok(summary) => (StatusCode::OK, Json(EndInterviewResponse { summary })).into_response(),
        Err(e) => {
            error!("Failed to end session {}: {}", session_id, e);
            interview_error_response(e)
        }
    }
}

/// POST /sessions/:session_id/reset
/// Clear the session's conversation state
pub async fn reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    state.orchestrator.reset(&session_id).await;
    StatusCode::NO_CONTENT
}

/// GET /interviews
/// List all persisted interview snapshots
pub async fn list_snapshots(State(state): State<AppState>) -> impl IntoResponse {
    match state.snapshots.list_all().await {
        Ok(scan) => (StatusCode::OK, Json(scan.snapshots)).into_response(),
        Err(e) => {
            error!("Failed to list snapshots: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to list snapshots: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// GET /interviews/:snapshot_id
/// Get one persisted snapshot by identifier
pub async fn get_snapshot(
    State(state): State<AppState>,
    Path(snapshot_id): Path<String>,
) -> impl IntoResponse {
    match state.snapshots.get(&snapshot_id).await {
        Ok(Some(snapshot)) => (StatusCode::OK, Json(snapshot)).into_response(),
        Ok(None) => interview_error_response(InterviewError::SnapshotNotFound(snapshot_id)),
        Err(e) => {
            error!("Failed to read snapshot {}: {}", snapshot_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to read snapshot: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
