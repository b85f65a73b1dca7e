//! Plain-text extraction from PDF documents.
//!
//! The heavy lifting (PDF parsing, font decoding, layout) is done by
//! `pdf-extract`. This crate opens a document, walks its pages and joins the
//! page texts, and exposes that through a CLI and a small HTTP service.

pub mod cli;
pub mod config;
pub mod extractor;
pub mod http;
pub mod utils;

#[cfg(test)]
mod test_fixtures;

pub use extractor::{
    extract, extract_multiple, extract_text, extract_text_from_mem, Extraction, PageText,
    PdfSource,
};
pub use utils::pdf::{ExtractError, PdfDocument};
