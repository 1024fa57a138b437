use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;

use super::{redirect_home, resolve_session};
use crate::state::AppState;

/// Explicit rendition of the original "reload replaces the file" lifecycle:
/// drops the document, question, and any pending notice.
pub async fn reset(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let (sid, new_cookie) = resolve_session(&headers);
    state.sessions.remove(&sid);
    redirect_home(new_cookie)
}
