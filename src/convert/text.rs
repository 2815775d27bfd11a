//! Plain text converter.

use crate::detect::FileKind;
use crate::error::Result;
use crate::model::Metadata;
use crate::render::{render_text_view, RenderStats};

use super::{ConvertOptions, ConvertResult, DocumentConverter};

/// Shows `.txt` attachments verbatim.
#[derive(Debug, Clone, Default)]
pub struct TextConverter {
    _private: (),
}

impl TextConverter {
    /// Create a new text converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentConverter for TextConverter {
    fn supported_kinds(&self) -> &[FileKind] {
        &[FileKind::Txt]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn convert(&self, content: &str, options: &ConvertOptions) -> Result<ConvertResult> {
        let metadata = Metadata {
            line_count: content.lines().count(),
            ..Default::default()
        };
        let mut result = ConvertResult::new(render_text_view(content, &options.render), metadata);

        if options.render.collect_stats {
            let mut stats = RenderStats::new();
            stats.count_text(content);
            result = result.with_stats(stats);
        }

        Ok(result.with_mime_type("text/plain"))
    }
}
