//! Markdown converter: classify, then render blocks.

use crate::detect::FileKind;
use crate::error::Result;
use crate::parser::BlockClassifier;
use crate::render::HtmlRenderer;

use super::{ConvertOptions, ConvertResult, DocumentConverter};

/// Markdown converter for `.md` and `.markdown` attachments.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    _private: (),
}

impl MarkdownConverter {
    /// Create a new Markdown converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentConverter for MarkdownConverter {
    fn supported_kinds(&self) -> &[FileKind] {
        &[FileKind::Md, FileKind::Markdown]
    }

    fn name(&self) -> &str {
        "markdown"
    }

    fn convert(&self, content: &str, options: &ConvertOptions) -> Result<ConvertResult> {
        let doc = BlockClassifier::new(options.parse.clone()).classify_document(content);
        let blocks = doc.to_blocks();
        let renderer = HtmlRenderer::new(options.render.clone());
        let wrap = |body: String| {
            format!(
                "<div class=\"{}\">{}</div>",
                options.render.class("markdown"),
                body
            )
        };

        let result = if options.render.collect_stats {
            let rendered = renderer.render_with_stats(&blocks);
            ConvertResult::new(wrap(rendered.html), doc.metadata).with_stats(rendered.stats)
        } else {
            ConvertResult::new(wrap(renderer.render(&blocks)), doc.metadata)
        };

        Ok(result.with_mime_type("text/markdown"))
    }
}
