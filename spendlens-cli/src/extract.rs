//! Statement text acquisition for the CLI: PDFs go through pdf-extract,
//! anything else is read as already-extracted text.

use anyhow::{Context, Result, anyhow};
use std::path::Path;

pub fn read_statement_text(path: &Path) -> Result<String> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading {}", path.display()))?;
        pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| anyhow!("extracting text from {}: {}", path.display(), e))
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}
