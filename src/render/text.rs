//! Plain text view.

use super::escape::escape_html;
use super::RenderOptions;

/// Render raw text verbatim inside an escaped `<pre>` block.
pub fn render_text_view(content: &str, options: &RenderOptions) -> String {
    format!(
        "<pre class=\"{}\">{}</pre>",
        options.class("text"),
        escape_html(content)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_view() {
        let html = render_text_view("a < b\n*c*", &RenderOptions::default());
        assert_eq!(html, "<pre class=\"av-text\">a &lt; b\n*c*</pre>");
    }
}
