// Document handle over the `pdf-extract` crate.
// Parsing and text layout live in the library; this module only gives them an
// open -> pages -> extract_text shape and keeps library panics contained.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while opening a PDF document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input path does not exist or cannot be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a well-formed PDF document.
    #[error("failed to open PDF document: {0}")]
    Open(#[from] pdf_extract::OutputError),

    /// The parser aborted on the input instead of returning an error.
    #[error("PDF parser aborted on malformed document: {0}")]
    Malformed(String),
}

/// An opened PDF document.
///
/// Page text is rendered once while opening. The handle owns it and
/// everything is released when the handle is dropped.
#[derive(Debug)]
pub struct PdfDocument {
    pages: Vec<String>,
}

impl PdfDocument {
    /// Opens the PDF stored at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(target: "pdf", path = %path.display(), size = bytes.len(), "Read PDF from disk");
        Self::from_mem(&bytes)
    }

    /// Opens a PDF stored fully in memory.
    pub fn from_mem(bytes: &[u8]) -> Result<Self, ExtractError> {
        let raw_pages = contain_panic(|| pdf_extract::extract_text_from_mem_by_pages(bytes))??;

        let pages = raw_pages.iter().map(|raw| normalize_page(raw)).collect();
        Ok(Self { pages })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pages in physical document order.
    pub fn pages(&self) -> Pages<'_> {
        Pages {
            inner: self.pages.iter().enumerate(),
        }
    }
}

/// Forward-only iterator over the pages of a [`PdfDocument`].
pub struct Pages<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, String>>,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, text)| Page { number: index + 1, text })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}

/// A single page borrowed from a [`PdfDocument`].
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    number: usize,
    text: &'a str,
}

impl<'a> Page<'a> {
    /// 1-based page number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Returns the page text, or `None` when the page carries no extractable
    /// text (blank or image-only pages).
    pub fn extract_text(&self) -> Option<&'a str> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text)
        }
    }
}

/// Trims trailing whitespace on every line and drops leading and trailing
/// blank lines. `pdf-extract` surrounds each page with newlines.
fn normalize_page(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().map(str::trim_end).collect();

    let Some(first) = lines.iter().position(|line| !line.is_empty()) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .unwrap_or(first);

    lines[first..=last].join("\n")
}

/// Runs a library call, turning a panic into [`ExtractError::Malformed`].
fn contain_panic<T>(call: impl FnOnce() -> T) -> Result<T, ExtractError> {
    panic::catch_unwind(AssertUnwindSafe(call)).map_err(|payload| {
        let message = panic_message(payload);
        warn!(target: "pdf", panic = %message, "PDF parser panicked; treating document as malformed");
        ExtractError::Malformed(message)
    })
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
