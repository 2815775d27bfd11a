//! Content converters dispatched by attachment kind.
//!
//! Each converter turns the raw text of one kind of attachment into a
//! ready-to-mount HTML view. The registry maps every [`FileKind`] a
//! converter declares to that converter.
//!
//! # Example
//!
//! ```
//! use attview::convert::{ConverterRegistry, ConvertOptions};
//! use attview::FileKind;
//!
//! fn main() -> attview::Result<()> {
//!     let registry = ConverterRegistry::with_defaults();
//!     let result = registry.convert("# Notes", FileKind::Md, &ConvertOptions::default())?;
//!     assert_eq!(result.content, "<div class=\"av-markdown\"><h1>Notes</h1></div>");
//!     Ok(())
//! }
//! ```

mod json;
mod markdown;
mod text;

pub use json::JsonConverter;
pub use markdown::MarkdownConverter;
pub use text::TextConverter;

use crate::detect::FileKind;
use crate::error::{Error, Result};
use crate::model::Metadata;
use crate::parser::ParseOptions;
use crate::render::{RenderOptions, RenderStats};
use std::collections::HashMap;
use std::sync::Arc;

/// Options for content conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Classifier options (Markdown only)
    pub parse: ParseOptions,

    /// Rendering options
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set classifier options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.render.collect_stats = collect;
        self
    }
}

/// Result of content conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Rendered HTML view
    pub content: String,

    /// Source metadata
    pub metadata: Metadata,

    /// Render statistics (if collected)
    pub stats: Option<RenderStats>,

    /// MIME type of the source content
    pub mime_type: &'static str,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(content: String, metadata: Metadata) -> Self {
        Self {
            content,
            metadata,
            stats: None,
            mime_type: "text/plain",
        }
    }

    /// Set render statistics.
    pub fn with_stats(mut self, stats: RenderStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Set MIME type.
    pub fn with_mime_type(mut self, mime_type: &'static str) -> Self {
        self.mime_type = mime_type;
        self
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Trait for content converters.
///
/// Implement this trait to add a view for another kind of attachment.
pub trait DocumentConverter: Send + Sync {
    /// Kinds this converter handles.
    fn supported_kinds(&self) -> &[FileKind];

    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Convert raw content to an HTML view.
    fn convert(&self, content: &str, options: &ConvertOptions) -> Result<ConvertResult>;

    /// Check if this converter handles the given kind.
    fn supports_kind(&self, kind: FileKind) -> bool {
        self.supported_kinds().contains(&kind)
    }
}

/// Registry for content converters.
pub struct ConverterRegistry {
    converters: HashMap<FileKind, Arc<dyn DocumentConverter>>,
    by_name: HashMap<String, Arc<dyn DocumentConverter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the Markdown, JSON and text converters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(MarkdownConverter::new()));
        registry.register(Arc::new(JsonConverter::new()));
        registry.register(Arc::new(TextConverter::new()));
        registry
    }

    /// Register a converter for all its supported kinds.
    ///
    /// `Unsupported` is never registered.
    pub fn register(&mut self, converter: Arc<dyn DocumentConverter>) {
        for kind in converter.supported_kinds() {
            if kind.is_supported() {
                self.converters.insert(*kind, converter.clone());
            }
        }
        self.by_name
            .insert(converter.name().to_lowercase(), converter);
    }

    /// Get a converter by kind.
    pub fn get_by_kind(&self, kind: FileKind) -> Option<Arc<dyn DocumentConverter>> {
        self.converters.get(&kind).cloned()
    }

    /// Get a converter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentConverter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if a kind has a converter.
    pub fn supports(&self, kind: FileKind) -> bool {
        self.converters.contains_key(&kind)
    }

    /// Get all kinds with a converter.
    pub fn supported_kinds(&self) -> Vec<FileKind> {
        self.converters.keys().copied().collect()
    }

    /// Convert content with the converter registered for `kind`.
    pub fn convert(
        &self,
        content: &str,
        kind: FileKind,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let converter = self
            .get_by_kind(kind)
            .ok_or_else(|| Error::UnsupportedKind(kind.to_string()))?;

        log::debug!(
            "converting {} bytes of {} content with the {} converter",
            content.len(),
            kind,
            converter.name()
        );

        let mut result = converter.convert(content, options)?;
        result.metadata.kind = Some(kind);
        Ok(result)
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
