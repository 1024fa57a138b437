use axum::http::header;
use axum::response::{Html, IntoResponse};

use crate::models::{NoticeView, PageView};

const INDEX_HTML: &str = include_str!("../../../templates/index.html");
const STYLE_CSS: &str = include_str!("../../../static/style.css");

/// Render the index page from a fully-derived [`PageView`].
///
/// Plain placeholder substitution. Fragments carrying user-controlled text
/// (notice, document, question) are substituted after the static ones, in an
/// order that never re-scans already-inserted content for earlier
/// placeholders.
pub fn render_index(view: &PageView) -> Html<String> {
    let html = INDEX_HTML
        .replace("{{ page_title }}", &escape_html(&view.title))
        .replace("{{ page_icon }}", &view.icon)
        .replace("{{ tagline }}", &escape_html(&view.tagline))
        .replace("{{ max_upload_mb }}", &view.max_upload_mb.to_string())
        .replace("{{ question_disabled }}", disabled_attr(view.question_enabled))
        .replace("{{ submit_disabled }}", disabled_attr(view.submit_enabled))
        .replace("{{ empty_hint }}", &empty_hint(view))
        .replace("{{ notice_section }}", &notice_section(view))
        .replace("{{ document_section }}", &document_section(view))
        .replace("{{ question_value }}", &escape_html(&view.question));
    Html(html)
}

/// Serve the embedded stylesheet with correct content type.
pub async fn serve_stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

/// Success banner plus preview area; empty when no document is loaded.
fn document_section(view: &PageView) -> String {
    let Some(doc) = &view.document else {
        return String::new();
    };

    format!(
        r#"  <section class="document">
    <p class="notice success">📄 {banner} ✅</p>
    <h2>📑 Document Preview (first 500 characters)</h2>
    <textarea readonly rows="10">{preview}</textarea>
  </section>
  <hr>
"#,
        banner = escape_html(&doc.success_banner()),
        preview = escape_html(&doc.preview),
    )
}

fn notice_section(view: &PageView) -> String {
    match &view.notice {
        Some(NoticeView::Info(msg)) => {
            format!(
                "  <p class=\"notice info\">🚧 {}</p>\n",
                escape_html(msg)
            )
        }
        Some(NoticeView::Error(msg)) => {
            format!(
                "  <p class=\"notice error\">⚠️ {}</p>\n",
                escape_html(msg)
            )
        }
        None => String::new(),
    }
}

/// Gentle nudge shown while no file is present.
fn empty_hint(view: &PageView) -> String {
    if view.document.is_some() {
        return String::new();
    }
    "  <p class=\"notice info\">ℹ️ Upload a PDF above to enable questions.</p>\n".to_string()
}

fn disabled_attr(enabled: bool) -> &'static str {
    if enabled { "" } else { " disabled" }
}

/// Minimal HTML escaping for text interpolated into the template.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Notice, Session};
    use crate::state::PageConfig;
    use askpdf_core::UploadedDocument;

    fn view(session: &Session, notice: Option<Notice>) -> PageView {
        PageView::from_session(&PageConfig::default(), session, notice)
    }

    fn session_with_doc(question: &str) -> Session {
        Session {
            document: Some(UploadedDocument {
                filename: "paper.pdf".into(),
                pages: vec!["Intro".into(), "Body".into(), "".into()],
            }),
            question: question.to_string(),
            notice: None,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>&"quote"'</b>"#),
            "&lt;b&gt;&amp;&quot;quote&quot;&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_empty_state_disables_both_controls_and_shows_hint() {
        let Html(html) = render_index(&view(&Session::default(), None));
        assert!(html.contains(r#"name="question""#));
        // Both controls disabled
        assert_eq!(html.matches(" disabled").count(), 2);
        assert!(html.contains("Upload a PDF above to enable questions."));
        assert!(!html.contains("Document Preview"));
    }

    #[test]
    fn test_document_without_question_keeps_submit_disabled() {
        let Html(html) = render_index(&view(&session_with_doc(""), None));
        assert!(html.contains("Loaded paper.pdf — 3 pages"));
        assert!(html.contains("Intro\nBody\n"));
        // Only the submit button stays disabled
        assert_eq!(html.matches(" disabled").count(), 1);
        assert!(!html.contains("Upload a PDF above to enable questions."));
    }

    #[test]
    fn test_document_and_question_enable_everything() {
        let Html(html) = render_index(&view(&session_with_doc("What is in section 3?"), None));
        assert_eq!(html.matches(" disabled").count(), 0);
        assert!(html.contains(r#"value="What is in section 3?""#));
    }

    #[test]
    fn test_notice_banners_render() {
        let Html(html) = render_index(&view(
            &Session::default(),
            Some(Notice::UploadError("not a PDF".into())),
        ));
        assert!(html.contains(r#"class="notice error""#));
        assert!(html.contains("not a PDF"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut session = session_with_doc("<script>alert(1)</script>");
        if let Some(doc) = session.document.as_mut() {
            doc.filename = "a<b>.pdf".into();
        }
        let Html(html) = render_index(&view(&session, None));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a&lt;b&gt;.pdf"));
    }

    #[test]
    fn test_no_placeholders_left_behind() {
        for session in [Session::default(), session_with_doc("q")] {
            let Html(html) = render_index(&view(
                &session,
                Some(Notice::AnswerStub("stub".into())),
            ));
            assert!(!html.contains("{{"), "unreplaced placeholder in: {html}");
        }
    }
}
