use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use viva_interview::{
    create_router, AppState, Config, HttpSpeechSynthesizer, InterviewOrchestrator,
    OllamaChatModel, SnapshotStore, WhisperTranscriber,
};

#[derive(Debug, Parser)]
#[command(name = "viva-interview", about = "Spoken mock-interview backend")]
struct Args {
    /// Config file name, without extension
    #[arg(long, default_value = "config/viva-interview")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("Viva Interview v0.1.0");
    info!("Loaded config: {}", cfg.service.name);
    info!(
        "HTTP server will bind to {}:{}",
        cfg.service.http.bind, cfg.service.http.port
    );
    info!("Transcription endpoint: {}", cfg.transcription.endpoint);
    info!("Model endpoint: {} ({})", cfg.model.endpoint, cfg.model.name);
    info!("Speech endpoint: {}", cfg.speech.endpoint);

    let transcriber = Arc::new(WhisperTranscriber::new(cfg.transcription.endpoint.clone()));
    let model = Arc::new(OllamaChatModel::new(
        cfg.model.endpoint.clone(),
        cfg.model.name.clone(),
    ));
    let synthesizer = Arc::new(HttpSpeechSynthesizer::new(
        cfg.speech.endpoint.clone(),
        cfg.speech.voice.clone(),
        &cfg.storage.responses_path,
    ));
    let snapshots = Arc::new(SnapshotStore::new(&cfg.storage.snapshots_path)?);

    let orchestrator = Arc::new(InterviewOrchestrator::new(
        transcriber,
        model,
        synthesizer,
        Arc::clone(&snapshots),
        cfg.transcription.language.clone(),
    ));

    let state = AppState::new(orchestrator, snapshots);
    let router = create_router(state, &cfg.storage.responses_path);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
