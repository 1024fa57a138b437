use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level per-page text extraction step; the
/// upload workflow (document assembly, preview, gating) lives in this crate
/// and stays independent of the concrete PDF library.
pub trait PdfBackend: Send + Sync {
    /// Extract the text of each page of a PDF file, in page order.
    ///
    /// A page with no extractable text must yield an empty string, not an
    /// error and not a missing entry.
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, BackendError>;
}
