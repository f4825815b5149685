//! Upload intake: reads the ranking form out of a multipart body and applies
//! the PDF allow-list.

use axum::extract::{multipart::MultipartError, Multipart};
use axum::http::StatusCode;
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::UploadedDocument;

/// Multipart field carrying résumé files. Repeated once per file.
pub const RESUMES_FIELD: &str = "resumes";
/// Multipart field carrying the job description text.
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// Everything one ranking interaction needs, before extraction.
#[derive(Debug, Default)]
pub struct RankingForm {
    pub job_description: String,
    pub documents: Vec<UploadedDocument>,
}

const PDF_EXTENSION: &str = ".pdf";

/// Returns true when the upload passes the PDF allow-list: a non-empty name
/// ending in `.pdf`, any case. The declared content type is not trusted.
pub fn is_pdf_upload(file_name: &str) -> bool {
    let name = file_name.trim();
    name.len() > PDF_EXTENSION.len() && name.to_ascii_lowercase().ends_with(PDF_EXTENSION)
}

fn upload_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Malformed upload: {}", e.body_text()))
    }
}

/// Reads the multipart ranking form. Unknown fields are skipped; files that
/// fail the allow-list are rejected by name.
pub async fn read_ranking_form(mut multipart: Multipart) -> Result<RankingForm, AppError> {
    let mut form = RankingForm::default();

    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            RESUMES_FIELD => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await.map_err(upload_error)?;

                // Browsers send an empty part when no file was chosen.
                if file_name.is_empty() && data.is_empty() {
                    continue;
                }
                if !is_pdf_upload(&file_name) {
                    return Err(AppError::UnsupportedFileType(file_name));
                }

                debug!("Received '{file_name}' ({} bytes)", data.len());
                form.documents.push(UploadedDocument {
                    name: file_name,
                    bytes: data,
                });
            }
            JOB_DESCRIPTION_FIELD => {
                form.job_description = field.text().await.map_err(upload_error)?;
            }
            _ => continue,
        }
    }

    Ok(form)
}

impl RankingForm {
    /// Checks that both inputs are present and within limits.
    pub fn validate(&self, max_resumes: usize) -> Result<(), AppError> {
        if self.documents.is_empty() {
            return Err(AppError::Validation(
                "Upload at least one resume (PDF)".to_string(),
            ));
        }
        if self.job_description.trim().is_empty() {
            return Err(AppError::Validation(
                "job_description cannot be empty".to_string(),
            ));
        }
        if self.documents.len() > max_resumes {
            return Err(AppError::Validation(format!(
                "Too many resumes: {} uploaded, at most {max_resumes} allowed",
                self.documents.len()
            )));
        }
        Ok(())
    }
}
