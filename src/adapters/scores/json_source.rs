//! Implements ScoreSourcePort for a flat JSON object of gift scores.
//!
//! Format: `{ "A_PROPHECY": 90, "C_TEACHING": 85 }`. Unknown keys are skipped.

use crate::domain::{DomainError, GiftScores};
use crate::ports::ScoreSourcePort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub struct JsonScoreSource {
    path: PathBuf,
}

impl JsonScoreSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ScoreSourcePort for JsonScoreSource {
    async fn load_scores(&self) -> Result<GiftScores, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::ScoreSource(format!("read {}: {}", self.path.display(), e))
        })?;
        let scores: GiftScores = serde_json::from_str(&content)
            .map_err(|e| DomainError::ScoreSource(format!("invalid scores JSON: {}", e)))?;
        info!(
            path = %self.path.display(),
            gifts = scores.len(),
            skipped = scores.unknown_keys().len(),
            "loaded scores"
        );
        Ok(scores)
    }
}
