//! HTML rendering of classified blocks.

use crate::model::Block;

use super::escape::escape_html;
use super::{InlineFormatter, ParagraphJoin, RenderOptions, RenderResult, RenderStats};

/// Render blocks to HTML with default options.
///
/// Fragments are joined with a single newline; blocks that render to an
/// empty string are dropped.
///
/// # Example
/// ```
/// use attview::{classify, render};
///
/// let html = render(&classify("# Title\n\n- one\n- two"));
/// assert_eq!(html, "<h1>Title</h1>\n<ul><li>one</li><li>two</li></ul>");
/// ```
pub fn render(blocks: &[Block]) -> String {
    HtmlRenderer::new(RenderOptions::default()).render(blocks)
}

/// Render blocks to HTML.
pub fn render_with_options(blocks: &[Block], options: &RenderOptions) -> String {
    HtmlRenderer::new(options.clone()).render(blocks)
}

/// Render blocks to HTML with statistics.
pub fn render_with_stats(blocks: &[Block], options: &RenderOptions) -> RenderResult {
    let mut options = options.clone();
    options.collect_stats = true;
    HtmlRenderer::new(options).render_with_stats(blocks)
}

/// Render blocks inside the markdown view container.
pub fn render_markdown_view(blocks: &[Block], options: &RenderOptions) -> String {
    let body = render_with_options(blocks, options);
    format!(
        "<div class=\"{}\">{}</div>",
        options.class("markdown"),
        body
    )
}

/// HTML block renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    inline: InlineFormatter,
    stats: RenderStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            inline: InlineFormatter::from_options(&options),
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render blocks to HTML.
    pub fn render(mut self, blocks: &[Block]) -> String {
        self.render_internal(blocks)
    }

    /// Render blocks to HTML with statistics.
    pub fn render_with_stats(mut self, blocks: &[Block]) -> RenderResult {
        self.options.collect_stats = true;
        let html = self.render_internal(blocks);
        RenderResult::new(html, self.stats)
    }

    fn render_internal(&mut self, blocks: &[Block]) -> String {
        let fragments: Vec<String> = blocks
            .iter()
            .map(|block| {
                if self.options.collect_stats {
                    self.stats.record(block);
                }
                self.render_block(block)
            })
            .filter(|fragment| !fragment.is_empty())
            .collect();
        fragments.join("\n")
    }

    /// Render one block to its HTML fragment.
    pub fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Header { level, text } => {
                let level = (*level).clamp(1, 6);
                format!("<h{level}>{}</h{level}>", self.inline.format(text))
            }
            Block::Paragraph { text } => self.render_paragraph(text),
            Block::List { ordered, items } => self.render_list(*ordered, items),
            Block::Table {
                header_cells,
                body_rows,
            } => self.render_table(header_cells, body_rows),
            Block::CodeBlock { code } => format!("<pre><code>{}</code></pre>", escape_html(code)),
            Block::Definition { label, value } => self.render_definition(label, value),
        }
    }

    fn render_paragraph(&self, text: &str) -> String {
        let lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
        let body = match self.options.paragraph_join {
            ParagraphJoin::LineBreak => lines
                .map(|line| self.inline.format(line))
                .collect::<Vec<_>>()
                .join("<br>"),
            ParagraphJoin::Space => self.inline.format(&lines.collect::<Vec<_>>().join(" ")),
        };
        if body.is_empty() {
            return String::new();
        }
        format!("<p>{}</p>", body)
    }

    fn render_list(&self, ordered: bool, items: &[String]) -> String {
        if items.is_empty() {
            return String::new();
        }
        let tag = if ordered { "ol" } else { "ul" };
        let items: String = items
            .iter()
            .map(|item| format!("<li>{}</li>", self.inline.format(item)))
            .collect();
        format!("<{tag}>{items}</{tag}>")
    }

    fn render_table(&self, header_cells: &[String], body_rows: &[Vec<String>]) -> String {
        if header_cells.is_empty() && body_rows.is_empty() {
            return String::new();
        }

        let mut output = format!("<table class=\"{}\">", self.options.class("table"));

        output.push_str("<thead><tr>");
        for cell in header_cells {
            output.push_str(&format!("<th>{}</th>", self.inline.format(cell)));
        }
        output.push_str("</tr></thead>");

        if !body_rows.is_empty() {
            output.push_str("<tbody>");
            for row in body_rows {
                output.push_str("<tr>");
                for cell in row {
                    output.push_str(&format!("<td>{}</td>", self.inline.format(cell)));
                }
                output.push_str("</tr>");
            }
            output.push_str("</tbody>");
        }

        output.push_str("</table>");
        output
    }

    fn render_definition(&self, label: &str, value: &str) -> String {
        let label = self.inline.format(label);
        if value.trim().is_empty() {
            return format!("<p><strong>{}:</strong></p>", label);
        }
        format!(
            "<div class=\"{}\"><strong class=\"{}\">{}:</strong> <span class=\"{}\">{}</span></div>",
            self.options.class("definition"),
            self.options.class("def-label"),
            label,
            self.options.class("def-value"),
            self.inline.format(value)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableLayout;

    #[test]
    fn test_render_header_levels() {
        assert_eq!(render(&[Block::header(1, "A")]), "<h1>A</h1>");
        assert_eq!(render(&[Block::header(6, "*F*")]), "<h6><em>F</em></h6>");
    }

    #[test]
    fn test_render_code_block_escaped_not_formatted() {
        let html = render(&[Block::code("*not italic* <b>")]);
        assert_eq!(html, "<pre><code>*not italic* &lt;b&gt;</code></pre>");
    }

    #[test]
    fn test_render_list() {
        assert_eq!(
            render(&[Block::list(true, ["**a**", "b"])]),
            "<ol><li><strong>a</strong></li><li>b</li></ol>"
        );
        assert_eq!(render(&[Block::list(false, Vec::<String>::new())]), "");
    }

    #[test]
    fn test_render_table() {
        let layout = TableLayout::from_lines(["| a | b |", "|---|---|", "| 1 | `2` |"]);
        let html = render(&[Block::table(layout)]);
        assert_eq!(
            html,
            "<table class=\"av-table\"><thead><tr><th>a</th><th>b</th></tr></thead>\
             <tbody><tr><td>1</td><td><code>2</code></td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_render_table_without_body() {
        let layout = TableLayout::from_lines(["| a | b |"]);
        let html = render(&[Block::table(layout)]);
        assert!(!html.contains("<tbody>"));
    }

    #[test]
    fn test_render_empty_table_dropped() {
        let html = render(&[
            Block::paragraph("x"),
            Block::table(TableLayout::default()),
            Block::paragraph("y"),
        ]);
        assert_eq!(html, "<p>x</p>\n<p>y</p>");
    }

    #[test]
    fn test_render_definition() {
        assert_eq!(
            render(&[Block::definition("Owner", "")]),
            "<p><strong>Owner:</strong></p>"
        );
        assert_eq!(
            render(&[Block::definition("Owner", "*Ada*")]),
            "<div class=\"av-definition\"><strong class=\"av-def-label\">Owner:</strong> \
             <span class=\"av-def-value\"><em>Ada</em></span></div>"
        );
    }

    #[test]
    fn test_paragraph_join_modes() {
        let blocks = [Block::paragraph("first *a\n  second* b")];

        assert_eq!(render(&blocks), "<p>first *a<br>second* b</p>");

        let options = RenderOptions::new().with_paragraph_join(ParagraphJoin::Space);
        assert_eq!(
            render_with_options(&blocks, &options),
            "<p>first <em>a second</em> b</p>"
        );
    }

    #[test]
    fn test_custom_class_prefix() {
        let options = RenderOptions::new().with_class_prefix("x-");
        let html = render_markdown_view(&[Block::paragraph("hi")], &options);
        assert_eq!(html, "<div class=\"x-markdown\"><p>hi</p></div>");
    }

    #[test]
    fn test_render_with_stats() {
        let blocks = [
            Block::header(1, "Title"),
            Block::paragraph("one two"),
            Block::code("x"),
        ];
        let result = render_with_stats(&blocks, &RenderOptions::default());
        assert_eq!(result.stats.header_count, 1);
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.stats.code_block_count, 1);
        assert_eq!(result.stats.block_count(), 3);
        assert!(result.html.starts_with("<h1>"));
    }
}
