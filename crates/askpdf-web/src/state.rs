use std::sync::Arc;

use askpdf_core::PdfBackend;

use crate::session::SessionStore;

/// Page-level configuration: built once before the first render, immutable
/// thereafter.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Browser tab title.
    pub title: String,
    /// Favicon glyph.
    pub icon: String,
    /// Benefit copy under the hero header.
    pub tagline: String,
    /// Advisory upload size hint shown next to the file control; also sets
    /// the request body limit.
    pub max_upload_mb: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Ask Your PDF".to_string(),
            icon: "📄".to_string(),
            tagline: "Drop a white-paper, contract, or textbook and get concise answers. \
                      All processing happens locally on this machine; files never leave it."
                .to_string(),
            max_upload_mb: 200,
        }
    }
}

impl PageConfig {
    /// Defaults overridden by `ASKPDF_MAX_UPLOAD_MB` when set and parseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(mb) = std::env::var("ASKPDF_MAX_UPLOAD_MB")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            config.max_upload_mb = mb;
        }
        config
    }
}

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub page: PageConfig,
    pub sessions: SessionStore,
    pub backend: Arc<dyn PdfBackend>,
}
