//! Axum route handlers for the Ranking API.

use axum::{
    extract::{Multipart, State},
    response::Response,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::upload::read_ranking_form;
use crate::models::resume::{RankedResult, RankingReport};
use crate::ranking::pipeline::rank_uploads;
use crate::report::export::csv_response;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub results: Vec<RankedResult>,
}

/// POST /api/v1/rankings
///
/// Multipart body: one or more `resumes` PDF parts plus a `job_description` text part.
/// Returns the ranked report as JSON.
pub async fn handle_rank(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RankingReport>, AppError> {
    let form = read_ranking_form(multipart).await?;
    let report = rank_uploads(state.scorer.as_ref(), form, state.config.max_resumes).await?;
    Ok(Json(report))
}

/// POST /api/v1/rankings/export
///
/// Renders the supplied ranking as a `Resume,Score` CSV attachment.
pub async fn handle_export(Json(request): Json<ExportRequest>) -> Result<Response, AppError> {
    csv_response(&request.results)
}
