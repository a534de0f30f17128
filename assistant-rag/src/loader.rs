//! Loading a source document from disk.
//!
//! Résumés are usually PDFs, so `.pdf` paths go through text extraction;
//! everything else is read as UTF-8 text. A missing or unreadable file is a
//! fatal startup condition and the error names the attempted path.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::document::Document;
use crate::error::{RagError, Result};

/// Load the document at `path`.
///
/// The document ID is the file stem; the path is recorded as `source_uri`
/// and in the metadata.
///
/// # Errors
///
/// Returns [`RagError::DocumentLoad`] naming the attempted path if the file
/// is missing, unreadable, or PDF extraction fails.
pub fn load_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(RagError::DocumentLoad {
            path: path.display().to_string(),
            message: "file not found; pass the path as an argument or place it at the default"
                .to_string(),
        });
    }

    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        pdf_extract::extract_text(path).map_err(|e| RagError::DocumentLoad {
            path: path.display().to_string(),
            message: format!("PDF text extraction failed: {e}"),
        })?
    } else {
        std::fs::read_to_string(path).map_err(|e| RagError::DocumentLoad {
            path: path.display().to_string(),
            message: format!("read failed: {e}"),
        })?
    };

    let id = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("document")
        .to_string();

    let mut metadata = HashMap::new();
    metadata.insert("source_path".to_string(), path.display().to_string());

    info!(document.id = %id, text_len = text.len(), "loaded document");

    Ok(Document { id, text, metadata, source_uri: Some(path.display().to_string()) })
}
