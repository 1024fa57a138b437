/// Number of characters of extracted text shown in the preview area.
pub const PREVIEW_CHARS: usize = 500;

/// Appended to the preview when the document text was cut off.
pub const TRUNCATION_MARKER: &str = " …";

/// Truncate document text for the preview area.
///
/// Counts characters, not bytes, so multibyte text is never split
/// mid-codepoint. Text at or under the limit is returned verbatim with no
/// marker.
pub fn preview(text: &str) -> String {
    let mut chars = text.char_indices();
    match chars.nth(PREVIEW_CHARS) {
        // nth(PREVIEW_CHARS) returning Some means at least 501 chars exist
        Some((byte_idx, _)) => {
            let mut out = text[..byte_idx].to_string();
            out.push_str(TRUNCATION_MARKER);
            out
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_verbatim() {
        assert_eq!(preview("Intro\nBody\n"), "Intro\nBody\n");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(preview(""), "");
    }

    #[test]
    fn test_exactly_limit_no_marker() {
        let text = "x".repeat(PREVIEW_CHARS);
        assert_eq!(preview(&text), text);
    }

    #[test]
    fn test_one_past_limit_truncates() {
        let text = "x".repeat(PREVIEW_CHARS + 1);
        let expected = format!("{}{}", "x".repeat(PREVIEW_CHARS), TRUNCATION_MARKER);
        assert_eq!(preview(&text), expected);
    }

    #[test]
    fn test_long_text_keeps_first_500_chars() {
        let text = "abcde".repeat(120); // 600 chars
        let out = preview(&text);
        assert!(out.ends_with(TRUNCATION_MARKER));
        let body = out.strip_suffix(TRUNCATION_MARKER).unwrap();
        assert_eq!(body.chars().count(), PREVIEW_CHARS);
        assert_eq!(body, &text[..PREVIEW_CHARS]);
    }

    #[test]
    fn test_multibyte_counted_as_chars() {
        // 600 two-byte chars: the cut must land on a char boundary and the
        // kept portion must be 500 characters, not 500 bytes.
        let text = "é".repeat(600);
        let out = preview(&text);
        assert!(out.ends_with(TRUNCATION_MARKER));
        let body = out.strip_suffix(TRUNCATION_MARKER).unwrap();
        assert_eq!(body.chars().count(), PREVIEW_CHARS);
    }
}
