use askpdf_core::{UploadedDocument, preview, question_enabled, submit_enabled};
use serde::Deserialize;

use crate::session::{Notice, Session};
use crate::state::PageConfig;

/// Form body of `POST /ask`.
#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub question: String,
}

/// Everything the index template needs, derived from one session snapshot.
#[derive(Debug, Clone)]
pub struct PageView {
    pub title: String,
    pub icon: String,
    pub tagline: String,
    pub max_upload_mb: usize,
    pub document: Option<DocumentView>,
    pub question: String,
    pub question_enabled: bool,
    pub submit_enabled: bool,
    pub notice: Option<NoticeView>,
}

#[derive(Debug, Clone)]
pub struct DocumentView {
    pub filename: String,
    pub page_count: usize,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeView {
    Info(String),
    Error(String),
}

impl DocumentView {
    fn from_document(doc: &UploadedDocument) -> Self {
        Self {
            filename: doc.filename.clone(),
            page_count: doc.page_count(),
            preview: preview(&doc.joined_text()),
        }
    }

    /// Success banner text, e.g. `Loaded paper.pdf — 12 pages`.
    pub fn success_banner(&self) -> String {
        format!("Loaded {} — {} pages", self.filename, self.page_count)
    }
}

impl PageView {
    /// Derive the full view, re-computing both gates from the session.
    pub fn from_session(page: &PageConfig, session: &Session, notice: Option<Notice>) -> Self {
        let document = session.document.as_ref();

        Self {
            title: page.title.clone(),
            icon: page.icon.clone(),
            tagline: page.tagline.clone(),
            max_upload_mb: page.max_upload_mb,
            document: document.map(DocumentView::from_document),
            question: session.question.clone(),
            question_enabled: question_enabled(document),
            submit_enabled: submit_enabled(document, &session.question),
            notice: notice.map(|n| match n {
                Notice::AnswerStub(msg) => NoticeView::Info(msg),
                Notice::UploadError(msg) => NoticeView::Error(msg),
            }),
        }
    }
}
