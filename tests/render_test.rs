//! Integration tests for inline formatting and block rendering.

use attview::render::{render_markdown_view, render_with_options, render_with_stats};
use attview::{classify, format_inline, render, to_html, Block, ParagraphJoin, RenderOptions};

#[test]
fn test_code_fence_renders_literal_asterisks() {
    let html = to_html("```\n*not italic*\n```");
    assert_eq!(html, "<pre><code>*not italic*</code></pre>");
    assert!(!html.contains("<em>"));
}

#[test]
fn test_table_separator_never_rendered_as_data() {
    let html = to_html("a|b\n--|--\n1|2");
    assert_eq!(
        html,
        "<table class=\"av-table\"><thead><tr><th>a</th><th>b</th></tr></thead>\
         <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
    );
    assert!(!html.contains("--"));
}

#[test]
fn test_full_document() {
    let text = "\
# Release notes

Version: **2.1**

Changes since the last release:
- faster `parse`
- fixed [docs](https://example.com/docs)

| area | status |
|------|--------|
| api  | *done* |

```
cargo install tool
```";

    let html = to_html(text);
    let fragments: Vec<&str> = html.split('\n').collect();

    assert_eq!(fragments[0], "<h1>Release notes</h1>");
    assert_eq!(
        fragments[1],
        "<div class=\"av-definition\"><strong class=\"av-def-label\">Version:</strong> \
         <span class=\"av-def-value\"><strong>2.1</strong></span></div>"
    );
    assert_eq!(fragments[2], "<p>Changes since the last release:</p>");
    assert!(fragments[3].starts_with("<ul><li>faster <code>parse</code></li>"));
    assert!(fragments[3].contains(
        "<a href=\"https://example.com/docs\" target=\"_blank\" rel=\"noopener noreferrer\">docs</a>"
    ));
    assert!(fragments[4].contains("<td><em>done</em></td>"));
    assert_eq!(fragments[5], "<pre><code>cargo install tool</code></pre>");
    assert_eq!(fragments.len(), 6);
}

#[test]
fn test_render_blocks_independently() {
    let a = Block::header(2, "A");
    let b = Block::paragraph("b");

    let ab = render(&[a.clone(), b.clone()]);
    let ba = render(&[b, a]);
    assert_eq!(ab, "<h2>A</h2>\n<p>b</p>");
    assert_eq!(ba, "<p>b</p>\n<h2>A</h2>");
}

#[test]
fn test_multi_line_paragraph_line_break_default() {
    assert_eq!(to_html("one\ntwo\nthree"), "<p>one<br>two<br>three</p>");
}

#[test]
fn test_multi_line_paragraph_space_join() {
    let options = RenderOptions::new().with_paragraph_join(ParagraphJoin::Space);
    let html = render_with_options(&classify("one\n  two\nthree"), &options);
    assert_eq!(html, "<p>one two three</p>");
}

#[test]
fn test_emphasis_across_lines_only_with_space_join() {
    let blocks = classify("*start\nend*");

    assert_eq!(render(&blocks), "<p>*start<br>end*</p>");

    let options = RenderOptions::new().with_paragraph_join(ParagraphJoin::Space);
    assert_eq!(
        render_with_options(&blocks, &options),
        "<p><em>start end</em></p>"
    );
}

#[test]
fn test_script_never_rendered() {
    let html = to_html("# <script>x</script>\n- <script>\n| <script> | b |\n```\n<script>\n```");
    assert!(!html.contains("<script>"));
    assert_eq!(html.matches("&lt;script&gt;").count(), 4);
}

#[test]
fn test_inline_plain_text_is_fixed_point() {
    let text = "plain words 123";
    let once = format_inline(text);
    assert_eq!(once, text);
    assert_eq!(format_inline(&once), once);
}

#[test]
fn test_render_plain_text_is_stable() {
    let text = "Hello world\n\nSecond paragraph";
    let first = to_html(text);
    assert_eq!(first, to_html(text));
    assert_eq!(first, "<p>Hello world</p>\n<p>Second paragraph</p>");
}

#[test]
fn test_autolink_option() {
    let options = RenderOptions::new().with_autolink(true);
    let html = render_with_options(&[Block::paragraph("see https://example.com/x")], &options);
    assert_eq!(
        html,
        "<p>see <a href=\"https://example.com/x\" target=\"_blank\" rel=\"noopener noreferrer\">https://example.com/x</a></p>"
    );
}

#[test]
fn test_markdown_view_wrapper() {
    let html = render_markdown_view(&classify("hi"), &RenderOptions::default());
    assert_eq!(html, "<div class=\"av-markdown\"><p>hi</p></div>");
}

#[test]
fn test_stats_over_classified_document() {
    let blocks = classify("# T\n\nKey: v\n\n- a\n- b\n\n| x | y |\n\n```\nc\n```");
    let result = render_with_stats(&blocks, &RenderOptions::default());

    assert_eq!(result.stats.header_count, 1);
    assert_eq!(result.stats.definition_count, 1);
    assert_eq!(result.stats.list_item_count, 2);
    assert_eq!(result.stats.table_count, 1);
    assert_eq!(result.stats.code_block_count, 1);
    assert_eq!(result.html, render(&blocks));
}
