use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};

pub mod ask;
pub mod index;
pub mod reset;
pub mod upload;

use crate::session::{self, SessionStore};

/// Resolve the request's session id, minting a fresh one (to be set on the
/// response) when the cookie is absent or invalid.
pub(crate) fn resolve_session(headers: &HeaderMap) -> (String, Option<String>) {
    match session::session_id_from_headers(headers) {
        Some(id) => (id, None),
        None => {
            let id = SessionStore::new_id();
            (id.clone(), Some(id))
        }
    }
}

/// Redirect back to the page, attaching the session cookie when fresh.
pub(crate) fn redirect_home(new_cookie: Option<String>) -> Response {
    match new_cookie {
        Some(id) => (
            [(header::SET_COOKIE, session::set_cookie_value(&id))],
            Redirect::to("/"),
        )
            .into_response(),
        None => Redirect::to("/").into_response(),
    }
}
