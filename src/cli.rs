//! The `pdf-text` command: one PDF in, its text on the writer.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::extractor::extract_text;

/// Writes the text of the PDF at `path` to `out`, followed by a newline.
/// Errors carry the path so the caller can print them as they are.
pub fn run(path: &Path, out: &mut impl Write) -> Result<()> {
    let text = extract_text(path)
        .with_context(|| format!("failed to extract text from {}", path.display()))?;

    writeln!(out, "{}", text).context("failed to write to stdout")?;
    out.flush().context("failed to write to stdout")?;
    Ok(())
}
