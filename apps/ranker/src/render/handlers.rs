//! Axum route handlers for the HTML page.
//!
//! Failures never produce a JSON body here: the form page is shown again with
//! the error message, using the status code of the underlying `AppError`.

use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::upload::read_ranking_form;
use crate::models::resume::RankedResult;
use crate::ranking::pipeline::rank_uploads;
use crate::render::page::index_page;
use crate::render::results::results_page;
use crate::report::export::csv_response;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportForm {
    pub ranking: String,
}

fn error_page(error: AppError, job_description: &str) -> Response {
    let (status, _) = error.status_and_code();
    let message = error.user_message();
    match index_page(job_description, Some(&message)) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(render_error) => render_error.into_response(),
    }
}

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    index_page("", None).map(Html)
}

/// POST /rank
///
/// Same multipart form as the JSON API; responds with the results page.
pub async fn handle_rank_page(State(state): State<AppState>, multipart: Multipart) -> Response {
    let form = match read_ranking_form(multipart).await {
        Ok(form) => form,
        Err(e) => return error_page(e, ""),
    };
    let job_description = form.job_description.clone();

    let report = match rank_uploads(state.scorer.as_ref(), form, state.config.max_resumes).await {
        Ok(report) => report,
        Err(e) => return error_page(e, &job_description),
    };

    match results_page(&report, &job_description) {
        Ok(html) => Html(html).into_response(),
        Err(e) => error_page(e, &job_description),
    }
}

/// POST /rank/export
///
/// The results page posts its ranking back as JSON in a form field; the CSV
/// is rebuilt from it on every request.
pub async fn handle_export_page(Form(form): Form<ExportForm>) -> Response {
    let exported = serde_json::from_str::<Vec<RankedResult>>(&form.ranking)
        .map_err(|e| AppError::Validation(format!("Malformed ranking: {e}")))
        .and_then(|results| csv_response(&results));

    match exported {
        Ok(response) => response,
        Err(e) => error_page(e, ""),
    }
}
