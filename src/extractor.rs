use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::utils::pdf::{ExtractError, PdfDocument};

/// Where the PDF bytes come from.
#[derive(Debug, Clone, Copy)]
pub enum PdfSource<'a> {
    Path(&'a Path),
    Bytes(&'a [u8]),
}

/// Text of a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageText {
    pub page_number: usize,
    pub text: String,
}

/// Aggregate output of one extraction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Original upload name; only set on the HTTP path.
    pub filename: Option<String>,
    pub page_count: usize,
    /// Page texts joined with `\n`, in page order.
    pub text: String,
    pub pages: Vec<PageText>,
}

impl Extraction {
    fn from_document(doc: &PdfDocument) -> Self {
        let pages: Vec<PageText> = doc
            .pages()
            .map(|page| PageText {
                page_number: page.number(),
                text: page.extract_text().unwrap_or_default().to_string(),
            })
            .collect();

        let text = pages
            .iter()
            .map(|page| page.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            filename: None,
            page_count: pages.len(),
            text,
            pages,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

/// Extracts the text of every page of the given PDF.
///
/// All-or-nothing: any failure to read or parse the input is returned and no
/// partial result is produced.
pub fn extract(source: PdfSource<'_>) -> Result<Extraction, ExtractError> {
    let started = std::time::Instant::now();
    let doc = match source {
        PdfSource::Path(path) => PdfDocument::open(path)?,
        PdfSource::Bytes(bytes) => PdfDocument::from_mem(bytes)?,
    };

    let extraction = Extraction::from_document(&doc);
    info!(
        target: "extractor",
        pages = extraction.page_count,
        chars = extraction.text.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "PDF extraction succeeded"
    );
    Ok(extraction)
}

/// Extracts all text from the PDF at `path`, pages separated by newlines.
pub fn extract_text(path: impl AsRef<Path>) -> Result<String, ExtractError> {
    extract(PdfSource::Path(path.as_ref())).map(|extraction| extraction.text)
}

/// Same as [`extract_text`] for a PDF held in memory.
pub fn extract_text_from_mem(bytes: &[u8]) -> Result<String, ExtractError> {
    extract(PdfSource::Bytes(bytes)).map(|extraction| extraction.text)
}

/// Extracts several PDFs at once, keyed by the path as given.
/// Stops at the first document that fails.
pub fn extract_multiple<I, P>(paths: I) -> Result<BTreeMap<String, String>, ExtractError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut texts = BTreeMap::new();
    for path in paths {
        let path = path.as_ref();
        debug!(target: "extractor", path = %path.display(), "Extracting batch entry");
        texts.insert(path.display().to_string(), extract_text(path)?);
    }
    Ok(texts)
}
