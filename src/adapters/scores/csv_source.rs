//! Implements ScoreSourcePort for semicolon-delimited CSV exports.
//!
//! Format: header `gift;score`, one row per gift. Uses the `csv` crate.

use crate::domain::{DomainError, GiftKey, GiftScores};
use crate::ports::ScoreSourcePort;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

#[derive(Debug, Deserialize)]
struct ScoreRow {
    gift: String,
    score: String,
}

pub struct CsvScoreSource {
    path: PathBuf,
}

impl CsvScoreSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// Parse CSV content into scores. Rows with unknown gifts are skipped whatever
/// their score column holds; gift rows must have a numeric score.
pub fn parse_scores_csv(content: &str) -> Result<GiftScores, DomainError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut scores = GiftScores::new();
    for row in rdr.deserialize::<ScoreRow>() {
        let row = row.map_err(|e| DomainError::ScoreSource(format!("invalid scores CSV: {}", e)))?;
        let Ok(gift) = row.gift.parse::<GiftKey>() else {
            scores.record_unknown(&row.gift);
            continue;
        };
        let score = row.score.parse::<f64>().map_err(|e| {
            DomainError::ScoreSource(format!("score for {} is not a number: {}", gift, e))
        })?;
        scores.insert(gift, score);
    }
    Ok(scores)
}

#[async_trait::async_trait]
impl ScoreSourcePort for CsvScoreSource {
    async fn load_scores(&self) -> Result<GiftScores, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::ScoreSource(format!("read {}: {}", self.path.display(), e))
        })?;
        let scores = parse_scores_csv(&content)?;
        info!(
            path = %self.path.display(),
            gifts = scores.len(),
            skipped = scores.unknown_keys().len(),
            "loaded scores"
        );
        Ok(scores)
    }
}
