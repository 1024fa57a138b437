use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};

use super::resolve_session;
use crate::models::PageView;
use crate::session;
use crate::state::AppState;
use crate::template;

pub async fn index(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let (sid, new_cookie) = resolve_session(&headers);

    // Pull the one-shot notice first so the snapshot below is notice-free
    let notice = state.sessions.take_notice(&sid);
    let snapshot = state.sessions.snapshot(&sid);
    let view = PageView::from_session(&state.page, &snapshot, notice);
    let html = template::render_index(&view);

    match new_cookie {
        Some(id) => {
            ([(header::SET_COOKIE, session::set_cookie_value(&id))], html).into_response()
        }
        None => html.into_response(),
    }
}
