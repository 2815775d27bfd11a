//! Classification options.

/// Options for classifying a document into blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Recognise `Label: value` lines as standalone definition blocks.
    ///
    /// When disabled such lines are ordinary paragraph text.
    pub definitions: bool,

    /// Treat `label: //...` lines (bare URLs such as `https://host`) as
    /// text instead of definitions. Off by default.
    pub urls_as_text: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable definition blocks.
    pub fn with_definitions(mut self, enabled: bool) -> Self {
        self.definitions = enabled;
        self
    }

    /// Keep lines whose definition value starts with `//` as text.
    pub fn with_urls_as_text(mut self, enabled: bool) -> Self {
        self.urls_as_text = enabled;
        self
    }

    /// Treat definition lines as plain text.
    pub fn without_definitions(self) -> Self {
        self.with_definitions(false)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            definitions: true,
            urls_as_text: false,
        }
    }
}
