//! JSON converter.

use crate::detect::FileKind;
use crate::error::Result;
use crate::model::Metadata;
use crate::render::render_json_view;

use super::{ConvertOptions, ConvertResult, DocumentConverter};

/// Pretty-prints JSON attachments; undecodable content degrades to text.
#[derive(Debug, Clone, Default)]
pub struct JsonConverter {
    _private: (),
}

impl JsonConverter {
    /// Create a new JSON converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentConverter for JsonConverter {
    fn supported_kinds(&self) -> &[FileKind] {
        &[FileKind::Json]
    }

    fn name(&self) -> &str {
        "json"
    }

    fn convert(&self, content: &str, options: &ConvertOptions) -> Result<ConvertResult> {
        let metadata = Metadata {
            line_count: content.lines().count(),
            ..Default::default()
        };
        let html = render_json_view(content, &options.render);
        Ok(ConvertResult::new(html, metadata).with_mime_type("application/json"))
    }
}
