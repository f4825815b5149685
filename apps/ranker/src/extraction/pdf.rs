//! PDF text extraction.
//!
//! Text is pulled page by page and concatenated in page order. A page without
//! a text layer (scanned image) contributes an empty string and is not an error.

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::resume::{Document, UploadedDocument};

/// Extracts plain text from one uploaded PDF on a blocking thread.
///
/// Decoding failures, including panics inside the PDF library, are reported
/// as `AppError::Extraction` naming the document.
pub async fn extract_pdf_text(upload: UploadedDocument) -> Result<Document, AppError> {
    let UploadedDocument { name, bytes } = upload;

    let pages = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    })
    .await
    .map_err(|e| AppError::Extraction {
        document: name.clone(),
        message: if e.is_panic() {
            "the PDF could not be decoded".to_string()
        } else {
            format!("extraction task failed: {e}")
        },
    })?
    .map_err(|e| AppError::Extraction {
        document: name.clone(),
        message: format!("PDF extraction error: {e}"),
    })?;

    let page_count = pages.len();
    let text = join_pages(pages);

    if text.trim().is_empty() {
        warn!("'{name}' has no extractable text ({page_count} pages); it may be image-based");
    } else {
        debug!("Extracted {} chars from '{name}' ({page_count} pages)", text.len());
    }

    Ok(Document::new(name, text))
}

/// Extracts every upload in order. Stops at the first document that fails.
pub async fn extract_all(uploads: Vec<UploadedDocument>) -> Result<Vec<Document>, AppError> {
    let mut documents = Vec::with_capacity(uploads.len());
    for upload in uploads {
        documents.push(extract_pdf_text(upload).await?);
    }
    Ok(documents)
}

/// Concatenates per-page text in page order with no separator.
pub fn join_pages(pages: Vec<String>) -> String {
    pages.concat()
}
