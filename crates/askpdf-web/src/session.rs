use askpdf_core::UploadedDocument;
use axum::http::HeaderMap;
use axum::http::header;
use dashmap::DashMap;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "askpdf_sid";

const SESSION_ID_LEN: usize = 32;

/// A banner rendered on the next page load, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The stubbed answer pipeline's static message.
    AnswerStub(String),
    /// A rejected or unreadable upload.
    UploadError(String),
}

/// Per-session state: the current document, the typed question, and any
/// pending one-shot notice. The two gate booleans are re-derived from this
/// on every render, never stored.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub document: Option<UploadedDocument>,
    pub question: String,
    pub notice: Option<Notice>,
}

/// Session store keyed by the `askpdf_sid` cookie.
#[derive(Default)]
pub struct SessionStore {
    inner: DashMap<String, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh random session id.
    pub fn new_id() -> String {
        std::iter::repeat_with(fastrand::alphanumeric)
            .take(SESSION_ID_LEN)
            .collect()
    }

    /// Clone of the session for `id`, or a blank one if none exists yet.
    pub fn snapshot(&self, id: &str) -> Session {
        self.inner
            .get(id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Apply `f` to the session for `id`, creating a blank one first if
    /// needed.
    pub fn update(&self, id: &str, f: impl FnOnce(&mut Session)) {
        let mut entry = self.inner.entry(id.to_string()).or_default();
        f(entry.value_mut());
    }

    /// Remove and return the pending notice, if any. Does not create a
    /// session entry.
    pub fn take_notice(&self, id: &str) -> Option<Notice> {
        self.inner.get_mut(id).and_then(|mut entry| entry.notice.take())
    }

    /// Drop all state for `id`.
    pub fn remove(&self, id: &str) {
        self.inner.remove(id);
    }
}

/// Read the session id out of the request's Cookie headers.
///
/// Ids that don't look like ours (wrong length, non-alphanumeric) are
/// ignored so a tampered cookie just starts a fresh session.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    for value in headers.get_all(header::COOKIE) {
        let Ok(cookies) = value.to_str() else {
            continue;
        };
        for pair in cookies.split(';') {
            if let Some((name, val)) = pair.trim().split_once('=') {
                if name == SESSION_COOKIE && is_valid_id(val) {
                    return Some(val.to_string());
                }
            }
        }
    }
    None
}

/// `Set-Cookie` value for a freshly minted session id.
pub fn set_cookie_value(id: &str) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}

fn is_valid_id(id: &str) -> bool {
    id.len() == SESSION_ID_LEN && id.chars().all(|c| c.is_ascii_alphanumeric())
}
