//! Results section: ranked cards, best match banner, chart and download button.

use minijinja::context;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::resume::{RankedResult, RankingReport};
use crate::render::chart::chart_view;
use crate::render::format_percent;
use crate::render::templates::render;

/// Form field carrying the serialized ranking to the export route.
pub const RANKING_FIELD: &str = "ranking";

#[derive(Debug, Serialize)]
struct Card<'a> {
    name: &'a str,
    percent: String,
    /// Progress bar width, always within [0, 100].
    width: String,
}

fn card(r: &RankedResult) -> Card<'_> {
    Card {
        name: &r.name,
        percent: format_percent(r.score),
        width: format!("{:.2}", r.percent().clamp(0.0, 100.0)),
    }
}

/// The full results page. The form is repeated above the ranking so the user
/// can run another comparison.
pub fn results_page(report: &RankingReport, job_description: &str) -> Result<String, AppError> {
    let ranking_json =
        serde_json::to_string(&report.results).map_err(|e| AppError::Export(e.to_string()))?;
    let cards: Vec<Card<'_>> = report.results.iter().map(card).collect();

    render(
        "results.html",
        context! {
            job_description,
            cards,
            best => report.best_match.as_ref().map(card),
            chart => chart_view(&report.results),
            ranking_json,
        },
    )
}
