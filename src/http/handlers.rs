use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    Json,
};
use tracing::{debug, info, warn};

use super::error::ApiError;
use super::types::{ExtractResponse, HealthResponse};
use crate::extractor::{extract, PdfSource};
use crate::utils::content_guard::is_accepted_pdf_upload;

/// `POST /extract`: extracts the text of the first uploaded file.
///
/// The content type is checked before any of the body is read. Extraction
/// runs on the blocking pool. Requests that are not `multipart/form-data`
/// get the same JSON error body as every other failure.
pub async fn extract_pdf(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let mut multipart = multipart?;
    while let Some(field) = multipart.next_field().await? {
        let Some(filename) = field.file_name().map(str::to_owned) else {
            debug!(name = ?field.name(), "Skipping non-file multipart field");
            continue;
        };
        let content_type = field.content_type().map(str::to_owned);

        if !is_accepted_pdf_upload(content_type.as_deref()) {
            warn!(filename = %filename, content_type = ?content_type, "Rejected non-PDF upload");
            return Err(ApiError::UnsupportedContentType);
        }

        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            warn!(filename = %filename, "Rejected empty upload");
            return Err(ApiError::EmptyUpload);
        }

        info!(target: "http", filename = %filename, size = bytes.len(), "Starting PDF text extraction");
        let extraction =
            tokio::task::spawn_blocking(move || extract(PdfSource::Bytes(&bytes))).await??;

        return Ok(Json(ExtractResponse::from(
            extraction.with_filename(filename),
        )));
    }

    warn!("No file field found in multipart upload");
    Err(ApiError::MissingFile)
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
