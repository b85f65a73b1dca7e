use serde::{Deserialize, Serialize};

use crate::extractor::Extraction;

/// Successful `POST /extract` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub filename: String,
    pub page_count: usize,
    pub text: String,
}

impl From<Extraction> for ExtractResponse {
    fn from(extraction: Extraction) -> Self {
        Self {
            filename: extraction.filename.unwrap_or_default(),
            page_count: extraction.page_count,
            text: extraction.text,
        }
    }
}

/// Error body shared by every failing response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
