use crate::UploadedDocument;

/// The question input accepts typing only once a document is loaded.
pub fn question_enabled(document: Option<&UploadedDocument>) -> bool {
    document.is_some()
}

/// The submit button needs both a document and a non-blank question.
pub fn submit_enabled(document: Option<&UploadedDocument>, question: &str) -> bool {
    document.is_some() && !question.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> UploadedDocument {
        UploadedDocument {
            filename: "paper.pdf".into(),
            pages: vec!["text".into()],
        }
    }

    #[test]
    fn test_question_disabled_without_document() {
        assert!(!question_enabled(None));
    }

    #[test]
    fn test_question_enabled_with_document() {
        assert!(question_enabled(Some(&doc())));
    }

    #[test]
    fn test_submit_disabled_without_document() {
        assert!(!submit_enabled(None, "What is in section 3?"));
    }

    #[test]
    fn test_submit_disabled_with_blank_question() {
        let d = doc();
        assert!(!submit_enabled(Some(&d), ""));
        assert!(!submit_enabled(Some(&d), "   "));
        assert!(!submit_enabled(Some(&d), "\t\n"));
    }

    #[test]
    fn test_submit_enabled_with_document_and_question() {
        let d = doc();
        assert!(submit_enabled(Some(&d), "What is in section 3?"));
        // Surrounding whitespace is fine as long as something remains
        assert!(submit_enabled(Some(&d), "  why?  "));
    }
}
