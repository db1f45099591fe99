use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};
use uuid::Uuid;

use super::record::InterviewSnapshot;
use crate::interview::ConversationContext;

/// Result of scanning the backing directory.
#[derive(Debug, Clone)]
pub struct SnapshotScan {
    /// Every record that could be read, ordered by id for a stable listing.
    pub snapshots: Vec<InterviewSnapshot>,
    /// Number of corrupt or unreadable records skipped during the scan.
    pub skipped: usize,
}

/// File-backed snapshot store: one `<id>.json` per record.
///
/// Writers never collide because every `save` generates its own fresh uuid.
/// Listing tolerates concurrent writers; a record added mid-scan may or may
/// not appear, and a corrupt record never aborts the scan.
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Open the store, creating the backing directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create snapshot directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Persist the session as a new snapshot and return its identifier.
    pub async fn save(&self, context: &ConversationContext, summary: &str) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let snapshot = InterviewSnapshot {
            id: id.clone(),
            title: context.title(),
            questions: context.questions().to_vec(),
            responses: context.responses().to_vec(),
            audio_refs: context.audio_refs().to_vec(),
            summary: summary.to_string(),
        };

        let json = serde_json::to_vec_pretty(&snapshot).context("failed to encode snapshot")?;
        let path = self.record_path(&id);
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;

        info!(
            snapshot_id = %id,
            turns = snapshot.responses.len(),
            "saved interview snapshot"
        );

        Ok(id)
    }

    /// Read every record in the store, skipping the ones that cannot be
    /// decoded. Skips are logged and counted rather than silently dropped.
    pub async fn list_all(&self) -> Result<SnapshotScan> {
        let mut snapshots = Vec::new();
        let mut skipped = 0;

        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .with_context(|| format!("failed to read snapshot directory {}", self.dir.display()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .context("failed to enumerate snapshot directory")?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            match read_record(&path).await {
                Ok(snapshot) => snapshots.push(snapshot),
                Err(e) => {
                    warn!("skipping unreadable snapshot {}: {:#}", path.display(), e);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            warn!(skipped, "snapshot listing skipped unreadable records");
        }

        snapshots.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(SnapshotScan { snapshots, skipped })
    }

    /// Exact lookup by identifier. `None` when no record backs the id.
    pub async fn get(&self, id: &str) -> Result<Option<InterviewSnapshot>> {
        // Ids are bare file stems; anything else cannot name a record.
        if !is_well_formed_id(id) {
            return Ok(None);
        }

        match tokio::fs::read(self.record_path(id)).await {
            Ok(bytes) => {
                let snapshot = serde_json::from_slice(&bytes)
                    .with_context(|| format!("snapshot record {} is corrupt", id))?;
                Ok(Some(snapshot))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read snapshot {}", id)),
        }
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

async fn read_record(path: &Path) -> Result<InterviewSnapshot> {
    let bytes = tokio::fs::read(path).await.context("read failed")?;
    serde_json::from_slice(&bytes).context("invalid JSON")
}

fn is_well_formed_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
