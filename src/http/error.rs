use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use super::types::ErrorDetail;
use crate::utils::pdf::ExtractError;

/// Failures of the extraction endpoint.
///
/// Validation failures carry their client-facing message. Extraction failures
/// are logged and collapse to one generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Only PDF uploads are supported.")]
    UnsupportedContentType,

    #[error("Empty file uploaded.")]
    EmptyUpload,

    #[error("No file uploaded.")]
    MissingFile,

    #[error("Failed to read upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Not a multipart upload: {0}")]
    MultipartRejection(#[from] MultipartRejection),

    #[error("Failed to extract PDF text.")]
    Extraction(#[from] ExtractError),

    #[error("Failed to extract PDF text.")]
    Worker(#[from] tokio::task::JoinError),
}

const EXTRACTION_FAILED: &str = "Failed to extract PDF text.";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::UnsupportedContentType | ApiError::EmptyUpload | ApiError::MissingFile => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Multipart(e) => {
                warn!("Rejected multipart upload: {}", e);
                (e.status(), e.body_text())
            }
            ApiError::MultipartRejection(rejection) => {
                warn!("Rejected non-multipart request: {}", rejection.body_text());
                (rejection.status(), rejection.body_text())
            }
            ApiError::Extraction(e) => {
                error!(error = %e, "PDF extraction failed");
                (StatusCode::INTERNAL_SERVER_ERROR, EXTRACTION_FAILED.to_string())
            }
            ApiError::Worker(e) => {
                error!(error = %e, "PDF extraction task failed");
                (StatusCode::INTERNAL_SERVER_ERROR, EXTRACTION_FAILED.to_string())
            }
        };

        (status, Json(ErrorDetail { detail })).into_response()
    }
}
