use crate::UploadedDocument;

/// Shown whenever the user asks a question. The retrieval pipeline behind
/// the button does not exist yet.
pub const NOT_CONNECTED_NOTICE: &str =
    "Backend not connected yet — answers are on the way. Your PDF and question were received.";

/// Placeholder for the future retrieval-QA pipeline.
///
/// Always returns the static notice. No network, no computation, and no
/// mutation of the document or question.
pub fn answer_question(_document: &UploadedDocument, _question: &str) -> &'static str {
    NOT_CONNECTED_NOTICE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_returns_static_notice() {
        let doc = UploadedDocument {
            filename: "paper.pdf".into(),
            pages: vec!["Intro".into()],
        };
        assert_eq!(
            answer_question(&doc, "What is in section 3?"),
            NOT_CONNECTED_NOTICE
        );
        assert_eq!(answer_question(&doc, "another question"), NOT_CONNECTED_NOTICE);
    }

    #[test]
    fn test_does_not_touch_inputs() {
        let doc = UploadedDocument {
            filename: "paper.pdf".into(),
            pages: vec!["Intro".into(), "".into()],
        };
        let before = doc.clone();
        let _ = answer_question(&doc, "q");
        assert_eq!(doc, before);
    }
}
