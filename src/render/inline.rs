//! Inline formatting: code spans, emphasis and links.
//!
//! The input is HTML-escaped before anything else happens, and every later
//! pass rewrites only escaped text. Passes run in a fixed order; overlapping
//! markers resolve by that order, not by nesting.

use super::escape::{escape_html, PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};
use super::RenderOptions;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CODE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid code span pattern"));

static BOLD_ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*\*(.*?)\*\*\*").expect("valid bold italic pattern"));

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"));

static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("valid italic pattern"));

static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));

static BARE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://[^\s<>\x{E000}\x{E001}]+").expect("valid bare url pattern")
});

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x{E000}([CL])(\d+)\x{E001}").expect("valid placeholder pattern"));

/// Schemes never emitted as link targets.
const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Escaped sequences that end a bare URL.
const URL_STOPS: [&str; 5] = ["&quot;", "&#x27;", "&#39;", "&lt;", "&gt;"];

/// Converts inline markup in one block's text into escaped HTML.
#[derive(Debug, Clone, Default)]
pub struct InlineFormatter {
    autolink: bool,
}

impl InlineFormatter {
    /// Create a formatter; `autolink` turns bare `http(s)://` runs into anchors.
    pub fn new(autolink: bool) -> Self {
        Self { autolink }
    }

    /// Create a formatter configured from render options.
    pub fn from_options(options: &RenderOptions) -> Self {
        Self::new(options.autolink)
    }

    /// Format `text` into escaped HTML.
    pub fn format(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut stash = Stash::default();
        let html = escape_html(text);

        let html = CODE_SPAN.replace_all(&html, |caps: &Captures| {
            stash.push_code(format!("<code>{}</code>", &caps[1]))
        });

        let html = BOLD_ITALIC.replace_all(&html, "<strong><em>${1}</em></strong>");
        let html = BOLD.replace_all(&html, "<strong>${1}</strong>");
        let html = ITALIC.replace_all(&html, "<em>${1}</em>");

        let html = LINK.replace_all(&html, |caps: &Captures| {
            let target = &caps[2];
            // Targets carrying formatting or code are left as literal text
            if target.contains(['<', PLACEHOLDER_OPEN]) {
                return caps[0].to_string();
            }
            stash.push_link(anchor(&safe_href(target), &caps[1]))
        });

        let html = if self.autolink {
            BARE_URL
                .replace_all(&html, |caps: &Captures| autolink(&caps[0]))
                .into_owned()
        } else {
            html.into_owned()
        };

        stash.restore(&html)
    }
}

/// Format `text` with default options (no bare URL linking).
///
/// # Example
/// ```
/// use attview::render::format_inline;
///
/// assert_eq!(format_inline("**bold** <b>"), "<strong>bold</strong> &lt;b&gt;");
/// ```
pub fn format_inline(text: &str) -> String {
    InlineFormatter::default().format(text)
}

/// Rendered fragments hidden behind placeholders until the final pass.
#[derive(Debug, Default)]
struct Stash {
    code: Vec<String>,
    links: Vec<String>,
}

impl Stash {
    fn push_code(&mut self, html: String) -> String {
        self.code.push(html);
        placeholder('C', self.code.len() - 1)
    }

    fn push_link(&mut self, html: String) -> String {
        self.links.push(html);
        placeholder('L', self.links.len() - 1)
    }

    /// Links may wrap code placeholders, so links are restored first.
    fn restore(&self, html: &str) -> String {
        let html = self.restore_kind(html, 'L');
        self.restore_kind(&html, 'C')
    }

    fn restore_kind(&self, html: &str, kind: char) -> String {
        let fragments = match kind {
            'L' => &self.links,
            _ => &self.code,
        };
        if fragments.is_empty() {
            return html.to_string();
        }
        PLACEHOLDER
            .replace_all(html, |caps: &Captures| {
                let index = caps[2].parse::<usize>().ok();
                match (caps[1].starts_with(kind), index) {
                    (true, Some(index)) if index < fragments.len() => fragments[index].clone(),
                    _ => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

fn placeholder(kind: char, index: usize) -> String {
    format!("{PLACEHOLDER_OPEN}{kind}{index}{PLACEHOLDER_CLOSE}")
}

fn anchor(href: &str, label: &str) -> String {
    format!(r#"<a href="{href}" target="_blank" rel="noopener noreferrer">{label}</a>"#)
}

/// Replace script-capable targets with `#`. `target` is already escaped.
fn safe_href(target: &str) -> String {
    let normalized: String = target
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    if UNSAFE_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
    {
        "#".to_string()
    } else {
        target.trim().to_string()
    }
}

fn autolink(matched: &str) -> String {
    let end = URL_STOPS
        .iter()
        .filter_map(|stop| matched.find(stop))
        .min()
        .unwrap_or(matched.len());
    let (url, rest) = matched.split_at(end);

    let trimmed = url.trim_end_matches(['.', ',', ';', ':', '!', '?', ')']);
    let tail = &url[trimmed.len()..];

    if trimmed.len() <= "https://".len() {
        return matched.to_string();
    }
    format!("{}{}{}", anchor(trimmed, trimmed), tail, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(format_inline(""), "");
    }

    #[test]
    fn test_escapes_first() {
        let html = format_inline("<script>alert('x')</script> & more");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; more"));
    }

    #[test]
    fn test_emphasis_precedence() {
        assert_eq!(format_inline("***both***"), "<strong><em>both</em></strong>");
        assert_eq!(format_inline("**bold**"), "<strong>bold</strong>");
        assert_eq!(format_inline("*it*"), "<em>it</em>");
        assert_eq!(
            format_inline("**b** and *i*"),
            "<strong>b</strong> and <em>i</em>"
        );
    }

    #[test]
    fn test_code_span_protects_content() {
        assert_eq!(
            format_inline("use `*ptr` here"),
            "use <code>*ptr</code> here"
        );
        assert_eq!(
            format_inline("`<b>`"),
            "<code>&lt;b&gt;</code>"
        );
    }

    #[test]
    fn test_unclosed_backtick_literal() {
        assert_eq!(format_inline("a `b c"), "a `b c");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            format_inline("[docs](https://example.com)"),
            r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer">docs</a>"#
        );
    }

    #[test]
    fn test_link_label_with_code() {
        let html = format_inline("[`run`](https://x.io)");
        assert!(html.contains("><code>run</code></a>"));
    }

    #[test]
    fn test_script_link_neutralized() {
        let html = format_inline("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"href="#""##));
    }

    #[test]
    fn test_link_target_quote_cannot_break_attribute() {
        let html = format_inline(r#"[x](http://a.io/" onclick="evil)"#);
        assert!(!html.contains(r#"" onclick"#));
    }

    #[test]
    fn test_forged_placeholder_is_inert() {
        let html = format_inline("\u{E000}C0\u{E001} `code`");
        assert!(html.starts_with("&#xE000;C0&#xE001;"));
        assert!(html.ends_with("<code>code</code>"));
    }

    #[test]
    fn test_bare_url_not_linked_by_default() {
        assert_eq!(format_inline("see https://x.io"), "see https://x.io");
    }

    #[test]
    fn test_autolink() {
        let formatter = InlineFormatter::new(true);
        assert_eq!(
            formatter.format("see https://x.io/a?b=1&c=2."),
            r#"see <a href="https://x.io/a?b=1&amp;c=2" target="_blank" rel="noopener noreferrer">https://x.io/a?b=1&amp;c=2</a>."#
        );
    }

    #[test]
    fn test_autolink_skips_existing_anchor() {
        let formatter = InlineFormatter::new(true);
        let html = formatter.format("[site](https://x.io)");
        assert_eq!(html.matches("<a ").count(), 1);
    }
}
