use std::path::Path;

use thiserror::Error;

pub mod answer;
pub mod backend;
pub mod gate;
pub mod preview;

// Re-export for convenience
pub use answer::{NOT_CONNECTED_NOTICE, answer_question};
pub use backend::{BackendError, PdfBackend};
pub use gate::{question_enabled, submit_enabled};
pub use preview::{PREVIEW_CHARS, TRUNCATION_MARKER, preview};

/// A PDF uploaded by the user, reduced to its extracted page texts.
///
/// One entry per page, in page order. A page with no extractable text
/// (scanned/image-only) contributes an empty string rather than being
/// omitted, so joining page texts is always well-defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub filename: String,
    pub pages: Vec<String>,
}

impl UploadedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Full document text: page texts joined with newlines.
    pub fn joined_text(&self) -> String {
        self.pages.join("\n")
    }
}

#[derive(Error, Debug)]
pub enum ExtractError {
    /// The uploaded bytes cannot be parsed as a PDF.
    #[error("not a readable PDF: {0}")]
    Malformed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extract the text of a PDF into an [`UploadedDocument`].
///
/// The single fallible step of the upload workflow. Backend failures
/// (unparseable bytes, mid-extraction errors) surface as
/// [`ExtractError::Malformed`] so callers have one user-facing failure to
/// report. Documents that parse but yield no text are not an error.
pub fn extract_document(
    path: &Path,
    filename: &str,
    backend: &dyn PdfBackend,
) -> Result<UploadedDocument, ExtractError> {
    let pages = backend.extract_pages(path).map_err(|e| match e {
        BackendError::Io(io) => ExtractError::Io(io),
        other => ExtractError::Malformed(other.to_string()),
    })?;

    Ok(UploadedDocument {
        filename: filename.to_string(),
        pages,
    })
}
