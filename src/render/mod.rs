//! Rendering module: inline formatting, block HTML and content views.

mod escape;
mod html;
mod inline;
mod json;
mod options;
mod result;
mod text;

pub use escape::escape_html;
pub use html::{
    render, render_markdown_view, render_with_options, render_with_stats, HtmlRenderer,
};
pub use inline::{format_inline, InlineFormatter};
pub use json::{pretty_json, render_json_view, to_json, JsonFormat};
pub use options::{ParagraphJoin, RenderOptions};
pub use result::{RenderResult, RenderStats};
pub use text::render_text_view;
