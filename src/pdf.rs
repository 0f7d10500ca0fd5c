use std::path::Path;

use tracing::info;

use crate::error::{CatalogError, Result};

/// Text of one PDF page, already split into trimmed non-empty lines.
#[derive(Debug, Clone)]
pub struct PageLines {
    pub number: usize,
    pub lines: Vec<String>,
}

/// Read the PDF at `path` and return its lines page by page, in reading order.
pub fn extract_pages(path: &Path) -> Result<Vec<PageLines>> {
    if !path.exists() {
        return Err(CatalogError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| CatalogError::io(path, e))?;
    let texts = pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
        CatalogError::Extraction {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;
    info!("Extracted {} pages from {}", texts.len(), path.display());

    Ok(pages_from_text(&texts))
}

pub fn pages_from_text(texts: &[String]) -> Vec<PageLines> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| PageLines {
            number: i + 1,
            lines: split_lines(text),
        })
        .collect()
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
