//! Ranking pipeline: extracted documents → scores → ordered report.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::pdf::extract_all;
use crate::extraction::upload::RankingForm;
use crate::models::resume::{Document, RankedResult, RankingReport};
use crate::ranking::scorer::SimilarityScorer;

/// Orders documents by score, highest first. Ties keep upload order.
pub fn rank(documents: &[Document], scores: &[f64]) -> Vec<RankedResult> {
    let mut pairs: Vec<(&Document, f64)> = documents.iter().zip(scores.iter().copied()).collect();

    // `sort_by` is stable, so equal scores stay in upload order.
    pairs.sort_by(|a, b| b.1.total_cmp(&a.1));

    pairs
        .into_iter()
        .enumerate()
        .map(|(i, (doc, score))| RankedResult {
            rank: i + 1,
            name: doc.name.clone(),
            score,
        })
        .collect()
}

/// Scores and ranks `documents` against `job_description`.
pub async fn build_report(
    scorer: &dyn SimilarityScorer,
    job_description: &str,
    documents: &[Document],
) -> Result<RankingReport, AppError> {
    let scores = scorer.score(job_description, documents).await?;
    if scores.len() != documents.len() {
        return Err(AppError::Internal(anyhow::anyhow!(
            "scorer returned {} scores for {} documents",
            scores.len(),
            documents.len()
        )));
    }

    let results = rank(documents, &scores);
    let best_match = results.first().cloned();
    let ranking_id = Uuid::new_v4();

    if let Some(best) = &best_match {
        info!(
            "Ranking {ranking_id}: {} resumes, best match '{}' ({:.4})",
            results.len(),
            best.name,
            best.score
        );
    }

    Ok(RankingReport {
        ranking_id,
        generated_at: Utc::now(),
        scorer_backend: scorer.backend().to_string(),
        best_match,
        results,
    })
}

/// Full pipeline for one interaction: validate → extract → score → rank.
pub async fn rank_uploads(
    scorer: &dyn SimilarityScorer,
    form: RankingForm,
    max_resumes: usize,
) -> Result<RankingReport, AppError> {
    form.validate(max_resumes)?;
    let RankingForm {
        job_description,
        documents,
    } = form;

    let documents = extract_all(documents).await?;
    build_report(scorer, &job_description, &documents).await
}
