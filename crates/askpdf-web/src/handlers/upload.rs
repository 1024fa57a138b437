use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::HeaderMap;
use axum::response::Response;
use tracing::{info, warn};

use askpdf_core::{PdfBackend, UploadedDocument};

use super::{redirect_home, resolve_session};
use crate::session::Notice;
use crate::state::AppState;
use crate::upload;

pub async fn upload(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let (sid, new_cookie) = resolve_session(&headers);

    if let Err(message) = handle_upload(&state, &sid, multipart).await {
        warn!(%message, "upload rejected");
        state
            .sessions
            .update(&sid, |s| s.notice = Some(Notice::UploadError(message)));
    }

    redirect_home(new_cookie)
}

async fn handle_upload(
    state: &Arc<AppState>,
    sid: &str,
    multipart: Multipart,
) -> Result<(), String> {
    let file = upload::parse_multipart(multipart).await?;

    // Scratch dir is auto-cleaned on drop, once extraction is done
    let temp_dir =
        tempfile::tempdir().map_err(|e| format!("Failed to create temp directory: {}", e))?;
    let pdf_path = temp_dir.path().join("upload.pdf");
    std::fs::write(&pdf_path, &file.data)
        .map_err(|e| format!("Failed to write temp file: {}", e))?;

    let document = extract_blocking(state.backend.clone(), pdf_path, file.filename.clone())
        .await
        .map_err(|e| format!("{}: {}", file.filename, e))?;

    info!(
        filename = %document.filename,
        pages = document.page_count(),
        "document loaded"
    );

    state.sessions.update(sid, |s| {
        s.document = Some(document);
        s.notice = None;
    });

    Ok(())
}

/// Extract page text using blocking I/O (MuPDF is not async).
async fn extract_blocking(
    backend: Arc<dyn PdfBackend>,
    path: PathBuf,
    filename: String,
) -> Result<UploadedDocument, String> {
    tokio::task::spawn_blocking(move || {
        askpdf_core::extract_document(&path, &filename, backend.as_ref()).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}
