//! CSV export of a ranking. Regenerated from the ranking on every request.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::resume::RankedResult;

/// File name offered to the browser.
pub const REPORT_FILE_NAME: &str = "resume_ranking.csv";

#[derive(Serialize)]
struct ReportRow<'a> {
    #[serde(rename = "Resume")]
    resume: &'a str,
    #[serde(rename = "Score")]
    score: f64,
}

/// Renders `Resume,Score` rows in ranking order.
pub fn to_csv(results: &[RankedResult]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if results.is_empty() {
        writer
            .write_record(["Resume", "Score"])
            .map_err(|e| AppError::Export(e.to_string()))?;
    }
    for r in results {
        writer
            .serialize(ReportRow {
                resume: &r.name,
                score: r.score,
            })
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

/// Wraps the CSV report in a download response.
pub fn csv_response(results: &[RankedResult]) -> Result<Response, AppError> {
    let body = to_csv(results)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct ParsedRow {
        #[serde(rename = "Resume")]
        resume: String,
        #[serde(rename = "Score")]
        score: f64,
    }

    fn result(rank: usize, name: &str, score: f64) -> RankedResult {
        RankedResult {
            rank,
            name: name.to_string(),
            score,
        }
    }

    fn parse(csv_text: &str) -> Vec<ParsedRow> {
        csv::Reader::from_reader(csv_text.as_bytes())
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_header_and_row_count() {
        let results = vec![
            result(1, "b.pdf", 0.8123),
            result(2, "a.pdf", 0.1),
            result(3, "c.pdf", 0.0),
        ];
        let text = to_csv(&results).unwrap();
        assert!(text.starts_with("Resume,Score\n"));
        assert_eq!(parse(&text).len(), 3);
    }

    #[test]
    fn test_export_parses_back_to_same_ranking() {
        let results = vec![
            result(1, "jane doe.pdf", 0.663_447_912_345_678_9),
            result(2, "john, \"JJ\" smith.pdf", 0.123_456_789),
            result(3, "empty.pdf", 0.0),
        ];
        let parsed = parse(&to_csv(&results).unwrap());
        for (row, expected) in parsed.iter().zip(&results) {
            assert_eq!(row.resume, expected.name);
            assert_eq!(row.score, expected.score);
        }
    }

    #[test]
    fn test_csv_response_is_attachment() {
        let response = csv_response(&[result(1, "a.pdf", 0.5)]).unwrap();
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "text/csv; charset=utf-8");
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume_ranking.csv\""
        );
    }

    #[test]
    fn test_empty_ranking_still_has_header() {
        let text = to_csv(&[]).unwrap();
        assert_eq!(text.trim_end(), "Resume,Score");
    }
}
