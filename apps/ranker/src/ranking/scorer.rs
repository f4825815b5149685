//! Similarity scoring: a pluggable, trait-based scorer that measures each résumé
//! against the job description.
//!
//! Default: `TfidfScorer` (TF-IDF vectors + cosine similarity).
//! `AppState` holds an `Arc<dyn SimilarityScorer>`.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::resume::Document;
use crate::ranking::tfidf::{cosine_similarity, fit_transform, TfidfError};

/// The scorer trait. Implement this to swap backends without touching
/// the handlers or the ranking pipeline.
#[async_trait]
pub trait SimilarityScorer: Send + Sync {
    /// Short label reported alongside results.
    fn backend(&self) -> &'static str;

    /// One score in [0, 1] per document, aligned with the input order.
    async fn score(&self, query: &str, documents: &[Document]) -> Result<Vec<f64>, AppError>;
}

/// Lexical scorer: query and documents are vectorized jointly, then each
/// document is compared to the query by cosine similarity.
pub struct TfidfScorer;

#[async_trait]
impl SimilarityScorer for TfidfScorer {
    fn backend(&self) -> &'static str {
        "tfidf"
    }

    async fn score(&self, query: &str, documents: &[Document]) -> Result<Vec<f64>, AppError> {
        let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
        score_tfidf(query, &texts)
    }
}

/// Scores `documents` against `query`.
///
/// Fails with `AppError::InsufficientText` when the query has no terms or no
/// document has any terms.
pub fn score_tfidf(query: &str, documents: &[&str]) -> Result<Vec<f64>, AppError> {
    if documents.is_empty() {
        return Err(AppError::InsufficientText(
            "no resumes were provided".to_string(),
        ));
    }

    let mut corpus = Vec::with_capacity(documents.len() + 1);
    corpus.push(query);
    corpus.extend_from_slice(documents);

    let rows = fit_transform(corpus.as_slice()).map_err(|e| match e {
        TfidfError::EmptyVocabulary => AppError::InsufficientText(
            "neither the job description nor the resumes contain any words".to_string(),
        ),
    })?;

    let (query_row, document_rows) = rows
        .split_first()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("TF-IDF produced no rows")))?;

    if query_row.is_empty() {
        return Err(AppError::InsufficientText(
            "the job description contains no comparable words".to_string(),
        ));
    }
    if document_rows.iter().all(|row| row.is_empty()) {
        return Err(AppError::InsufficientText(
            "none of the resumes contain extractable text".to_string(),
        ));
    }

    Ok(document_rows
        .iter()
        .map(|row| cosine_similarity(query_row, row).clamp(0.0, 1.0))
        .collect())
}
