//! JSON rendering: the block model dump and the JSON content view.

use crate::error::{Error, Result};
use crate::model::Document;

use super::escape::escape_html;
use super::text::render_text_view;
use super::RenderOptions;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a classified document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Re-indent JSON content with two spaces, keeping key order.
pub fn pretty_json(content: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Render JSON content as an escaped, pretty-printed `<pre>` view.
///
/// Content that fails to decode falls back to the plain text view.
pub fn render_json_view(content: &str, options: &RenderOptions) -> String {
    match pretty_json(content) {
        Ok(pretty) => format!(
            "<pre class=\"{}\">{}</pre>",
            options.class("json"),
            escape_html(&pretty)
        ),
        Err(e) => {
            log::warn!("JSON content could not be parsed, showing raw text: {}", e);
            render_text_view(content, options)
        }
    }
}
