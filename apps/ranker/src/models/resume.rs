use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A file accepted at the upload boundary, before text extraction.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub bytes: Bytes,
}

/// A résumé with its extracted plain text. Lives for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// One row of the ranking: a document name and its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub name: String,
    /// Cosine similarity in [0, 1].
    pub score: f64,
}

impl RankedResult {
    /// Score scaled to 0–100 for display.
    pub fn percent(&self) -> f64 {
        self.score * 100.0
    }
}

/// Full ranking returned to callers and rendered on the results page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub ranking_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub scorer_backend: String, // "tfidf"
    pub best_match: Option<RankedResult>,
    pub results: Vec<RankedResult>,
}
