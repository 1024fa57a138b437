use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;

use askpdf_core::{answer_question, submit_enabled};

use super::{redirect_home, resolve_session};
use crate::models::AskForm;
use crate::session::Notice;
use crate::state::AppState;

pub async fn ask(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<AskForm>,
) -> Response {
    let (sid, new_cookie) = resolve_session(&headers);

    state.sessions.update(&sid, |s| {
        s.question = form.question.clone();
        // The disabled attribute is advisory; the gates decide here
        s.notice = match s.document.as_ref() {
            Some(doc) if submit_enabled(Some(doc), &s.question) => Some(Notice::AnswerStub(
                answer_question(doc, &s.question).to_string(),
            )),
            _ => None,
        };
    });

    redirect_home(new_cookie)
}
