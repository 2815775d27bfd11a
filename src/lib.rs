//! # attview
//!
//! Safe HTML views for plain-text attachments.
//!
//! Markdown attachments are split into typed blocks (headers, paragraphs,
//! lists, tables, code blocks, definitions) by a single-pass classifier and
//! rendered with an inline formatter that escapes its input before applying
//! any markup. JSON attachments are pretty-printed and text attachments are
//! shown verbatim, both escaped.
//!
//! ## Quick Start
//!
//! ```
//! use attview::{classify, render};
//!
//! let blocks = classify("# Report\n\nStatus: **green**\n\n- one\n- two");
//! let html = render(&blocks);
//! assert!(html.starts_with("<h1>Report</h1>"));
//! ```
//!
//! ## Features
//!
//! - **Block classifier**: fenced code, pipe tables, lists, definitions
//! - **Injection-safe inline formatting**: escaping first, then markup
//! - **Content views**: Markdown, JSON and plain text by attachment kind
//! - **Viewer pipeline**: fetch, detect and convert over injected collaborators

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod viewer;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter};
pub use detect::{detect_file_kind, extract_filename, FileKind};
pub use error::{Error, FetchError, Result};
pub use model::{Block, Document, Line, Metadata};
pub use parser::{classify, BlockClassifier, ParseOptions};
pub use render::{format_inline, render, JsonFormat, ParagraphJoin, RenderOptions};
pub use viewer::{
    AttachmentRequest, ContentFetcher, EnabledFlag, FetchedContent, Notice, NoticeLevel,
    ViewerContent, Visualizer,
};

use std::path::Path;

/// Classify Markdown text and render it to HTML.
///
/// # Example
///
/// ```
/// let html = attview::to_html("Owner: *Ada*");
/// assert!(html.contains("<em>Ada</em>"));
/// ```
pub fn to_html(text: &str) -> String {
    render::render(&parser::classify(text))
}

/// Classify and render Markdown text with custom options.
pub fn to_html_with_options(
    text: &str,
    parse_options: &ParseOptions,
    render_options: &RenderOptions,
) -> String {
    let blocks = parser::classify_with_options(text, parse_options);
    render::render_with_options(&blocks, render_options)
}

/// Render content of a known kind to its HTML view.
///
/// # Example
///
/// ```
/// use attview::{render_content, FileKind};
///
/// let html = render_content("{\"a\":1}", FileKind::Json)?;
/// assert!(html.starts_with("<pre class=\"av-json\">"));
/// # Ok::<(), attview::Error>(())
/// ```
pub fn render_content(content: &str, kind: FileKind) -> Result<String> {
    AttView::new().render(content, kind).map(|result| result.content)
}

/// Read a file and render it, taking the kind from its extension.
pub fn render_file<P: AsRef<Path>>(path: P) -> Result<String> {
    AttView::new().render_file(path).map(|result| result.content)
}

/// Builder for rendering attachments with custom options.
///
/// # Example
///
/// ```
/// use attview::{AttView, FileKind, ParagraphJoin};
///
/// let result = AttView::new()
///     .without_definitions()
///     .with_paragraph_join(ParagraphJoin::Space)
///     .with_autolink()
///     .render("Docs: see https://example.com", FileKind::Md)?;
/// assert!(result.content.contains("<a href=\"https://example.com\""));
/// # Ok::<(), attview::Error>(())
/// ```
pub struct AttView {
    options: ConvertOptions,
    registry: ConverterRegistry,
}

impl AttView {
    /// Create a builder with default options and converters.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
            registry: ConverterRegistry::with_defaults(),
        }
    }

    /// Treat `Label: value` lines as paragraph text.
    pub fn without_definitions(mut self) -> Self {
        self.options.parse = self.options.parse.without_definitions();
        self
    }

    /// Set how multi-line paragraphs are joined.
    pub fn with_paragraph_join(mut self, join: ParagraphJoin) -> Self {
        self.options.render = self.options.render.with_paragraph_join(join);
        self
    }

    /// Turn bare URLs into links.
    pub fn with_autolink(mut self) -> Self {
        self.options.render = self.options.render.with_autolink(true);
        self
    }

    /// Set the CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.render = self.options.render.with_class_prefix(prefix);
        self
    }

    /// Collect render statistics.
    pub fn with_stats(mut self) -> Self {
        self.options = self.options.with_stats(true);
        self
    }

    /// Replace all options at once.
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Options that will be used.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Render content of a known kind.
    pub fn render(&self, content: &str, kind: FileKind) -> Result<ConvertResult> {
        self.registry.convert(content, kind, &self.options)
    }

    /// Read and render a file, taking the kind from its extension.
    pub fn render_file<P: AsRef<Path>>(&self, path: P) -> Result<ConvertResult> {
        let path = path.as_ref();
        let kind = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(FileKind::from_extension)
            .unwrap_or(FileKind::Unsupported);
        if !kind.is_supported() {
            return Err(Error::UnsupportedKind(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let mut result = self.render(&content, kind)?;
        result.metadata.filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(result)
    }
}

impl Default for AttView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html() {
        assert_eq!(
            to_html("# Title\nbody"),
            "<h1>Title</h1>\n<p>body</p>"
        );
    }

    #[test]
    fn test_to_html_with_options() {
        let html = to_html_with_options(
            "a\nb",
            &ParseOptions::default(),
            &RenderOptions::new().with_paragraph_join(ParagraphJoin::Space),
        );
        assert_eq!(html, "<p>a b</p>");
    }

    #[test]
    fn test_builder_with_options() {
        let options = ConvertOptions::new()
            .with_parse_options(ParseOptions::new().without_definitions())
            .with_render_options(RenderOptions::new().with_paragraph_join(ParagraphJoin::Space));
        let builder = AttView::new().with_options(options);
        assert!(!builder.options().parse.definitions);
        assert_eq!(
            builder.options().render.paragraph_join,
            ParagraphJoin::Space
        );

        let result = builder.render("Owner: Ada
next", FileKind::Md).unwrap();
        assert!(result.content.contains("<p>Owner: Ada next</p>"));
    }

    #[test]
    fn test_render_content_unsupported() {
        assert!(matches!(
            render_content("x", FileKind::Unsupported),
            Err(Error::UnsupportedKind(_))
        ));
    }

    #[test]
    fn test_render_file_missing() {
        assert!(matches!(
            render_file("/nonexistent/notes.md"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_render_file_unsupported_extension() {
        assert!(matches!(
            render_file("/nonexistent/archive.zip"),
            Err(Error::UnsupportedKind(_))
        ));
    }

    #[test]
    fn test_builder_stats() {
        let result = AttView::new()
            .with_stats()
            .render("# a\n# b", FileKind::Markdown)
            .unwrap();
        assert_eq!(result.stats.unwrap().header_count, 2);
    }
}
