//! Rendering options and configuration.

/// Options for rendering blocks to HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// How multi-line paragraphs are joined
    pub paragraph_join: ParagraphJoin,

    /// Turn bare `http(s)://` URLs into anchors
    pub autolink: bool,

    /// Prefix for generated CSS class names (e.g. `av-table`)
    pub class_prefix: String,

    /// Collect rendering statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paragraph join mode.
    pub fn with_paragraph_join(mut self, join: ParagraphJoin) -> Self {
        self.paragraph_join = join;
        self
    }

    /// Enable or disable bare URL linking.
    pub fn with_autolink(mut self, autolink: bool) -> Self {
        self.autolink = autolink;
        self
    }

    /// Set the CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Full class name for `name`.
    pub fn class(&self, name: &str) -> String {
        format!("{}{}", self.class_prefix, name)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            paragraph_join: ParagraphJoin::LineBreak,
            autolink: false,
            class_prefix: "av-".to_string(),
            collect_stats: false,
        }
    }
}

/// How the retained lines of a multi-line paragraph are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphJoin {
    /// Format each line on its own and join with `<br>`
    #[default]
    LineBreak,
    /// Join trimmed lines with one space and format the result once
    Space,
}

impl ParagraphJoin {
    /// Parse a join mode name (`break`/`br`/`linebreak` or `space`).
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "break" | "br" | "linebreak" | "line-break" => Ok(ParagraphJoin::LineBreak),
            "space" => Ok(ParagraphJoin::Space),
            other => Err(format!("Unknown paragraph join mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_paragraph_join(ParagraphJoin::Space)
            .with_autolink(true)
            .with_class_prefix("viewer-");

        assert_eq!(options.paragraph_join, ParagraphJoin::Space);
        assert!(options.autolink);
        assert_eq!(options.class("table"), "viewer-table");
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.paragraph_join, ParagraphJoin::LineBreak);
        assert!(!options.autolink);
        assert_eq!(options.class("json"), "av-json");
    }

    #[test]
    fn test_paragraph_join_parse() {
        assert_eq!(ParagraphJoin::parse("space").unwrap(), ParagraphJoin::Space);
        assert_eq!(ParagraphJoin::parse("BR").unwrap(), ParagraphJoin::LineBreak);
        assert!(ParagraphJoin::parse("tab").is_err());
    }
}
