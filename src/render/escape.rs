//! HTML escaping.

/// Opens an inline placeholder token.
pub(crate) const PLACEHOLDER_OPEN: char = '\u{E000}';

/// Closes an inline placeholder token.
pub(crate) const PLACEHOLDER_CLOSE: char = '\u{E001}';

/// Escape `&`, `<`, `>`, `"` and `'` so `text` is inert in element content
/// and quoted attribute values.
///
/// The private-use characters the inline formatter uses for placeholders are
/// written as numeric references, so escaped text never contains a raw one.
pub fn escape_html(text: &str) -> String {
    let escaped = html_escape::encode_quoted_attribute(text);
    if escaped.contains([PLACEHOLDER_OPEN, PLACEHOLDER_CLOSE]) {
        escaped
            .replace(PLACEHOLDER_OPEN, "&#xE000;")
            .replace(PLACEHOLDER_CLOSE, "&#xE001;")
    } else {
        escaped.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_chars() {
        let escaped = escape_html(r#"<a href="x">&</a>"#);
        assert!(escaped.starts_with("&lt;a href="));
        assert!(escaped.contains("&amp;"));
        assert!(escaped.contains("&gt;"));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('<'));
    }

    #[test]
    fn test_escape_single_quote() {
        assert!(!escape_html("it's").contains('\''));
    }

    #[test]
    fn test_escape_placeholder_chars() {
        let escaped = escape_html("a\u{E000}C0\u{E001}b");
        assert_eq!(escaped, "a&#xE000;C0&#xE001;b");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }
}
