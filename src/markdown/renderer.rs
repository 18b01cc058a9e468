//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::Options;

use crate::highlight::{GrammarRegistry, escape_html};

const CODE_OPEN: &str = "<code class=\"language-";
const CODE_CLOSE: &str = "</code>";
const PRE_OPEN: &str = "<pre>";
const PRE_CLOSE: &str = "</pre>";

/// Renders markdown to safe HTML with GitHub Flavored Markdown extensions.
///
/// Provides GFM extensions including tables, strikethrough, autolinks,
/// task lists, and footnotes. Code blocks that name a language are
/// highlighted with CSS classes. Article bodies use the playground variant,
/// which additionally marks every fenced code block for the page's live
/// editor.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    grammars: GrammarRegistry,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Configures GFM extensions and security settings:
    /// - Tables, strikethrough, autolinks, task lists, footnotes
    /// - Raw HTML omitted from output
    /// - Syntax highlighting using CSS classes
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;

        // Comment bodies are untrusted user input
        options.render.unsafe_ = false;

        Self {
            options,
            grammars: GrammarRegistry::new(),
        }
    }

    /// Renders markdown content to HTML string.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let html = comrak::markdown_to_html(content, &self.options);
        self.highlight_code_blocks(&html, false)
    }

    /// Renders markdown content with playground wrappers around code blocks.
    ///
    /// Each highlighted `<pre>` block is wrapped in
    /// `<div class="playground" data-language="...">`.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render_playground(&self, content: &str) -> Result<String> {
        let html = comrak::markdown_to_html(content, &self.options);
        self.highlight_code_blocks(&html, true)
    }

    /// Post-processes HTML to apply syntax highlighting with CSS classes.
    ///
    /// Finds code blocks with language-* classes from comrak's output and
    /// replaces the plain text content with highlighted HTML.
    ///
    /// # Arguments
    ///
    /// * `html`: Raw HTML from comrak with <code class="language-X"> blocks
    /// * `playground`: Wrap enclosing `<pre>` blocks in playground containers
    ///
    /// # Errors
    ///
    /// Returns error if highlighting fails
    fn highlight_code_blocks(&self, html: &str, playground: bool) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        let mut search_pos = 0;

        while let Some(found) = html[search_pos..].find(CODE_OPEN) {
            let code_start = search_pos + found;
            let lang_start = code_start + CODE_OPEN.len();

            let Some(lang_len) = html[lang_start..].find('"') else {
                search_pos = code_start + 1;
                continue;
            };
            let lang_end = lang_start + lang_len;
            let language = &html[lang_start..lang_end];

            let Some(open_len) = html[lang_end..].find('>') else {
                search_pos = code_start + 1;
                continue;
            };
            let content_start = lang_end + open_len + 1;

            let Some(content_len) = html[content_start..].find(CODE_CLOSE) else {
                search_pos = code_start + 1;
                continue;
            };
            let content_end = content_start + content_len;

            let decoded = Self::html_decode(&html[content_start..content_end]);
            let highlighted = self
                .grammars
                .highlight(&decoded, language)
                .context("Failed to highlight code block")?;

            let wrap = playground && html[last_end..code_start].ends_with(PRE_OPEN);
            if wrap {
                result.push_str(&html[last_end..code_start - PRE_OPEN.len()]);
                result.push_str("<div class=\"playground\" data-language=\"");
                result.push_str(language);
                result.push_str("\">");
                result.push_str(PRE_OPEN);
            } else {
                result.push_str(&html[last_end..code_start]);
            }

            result.push_str(CODE_OPEN);
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&highlighted);
            result.push_str(CODE_CLOSE);

            last_end = content_end + CODE_CLOSE.len();
            if wrap && html[last_end..].starts_with(PRE_CLOSE) {
                result.push_str(PRE_CLOSE);
                result.push_str("</div>");
                last_end += PRE_CLOSE.len();
            }
            search_pos = last_end;
        }

        result.push_str(&html[last_end..]);

        Ok(result)
    }

    /// Decodes HTML entities comrak applies to code block content.
    fn html_decode(html: &str) -> String {
        html.replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }

    /// Renders markdown as a fallback-safe HTML string.
    ///
    /// Falls back to escaped source text when highlighting fails, so a single
    /// malformed code block never blanks a page section.
    pub fn render_or_escape(&self, content: &str, playground: bool) -> String {
        let rendered = if playground {
            self.render_playground(content)
        } else {
            self.render(content)
        };
        Self::or_escaped(content, rendered)
    }

    /// Returns rendered HTML, or the escaped source in a `<pre>` on failure.
    fn or_escaped(content: &str, rendered: Result<String>) -> String {
        rendered.unwrap_or_else(|e| {
            tracing::warn!(error = %format!("{:#}", e), "markdown rendering failed");
            format!("<pre>{}</pre>", escape_html(content))
        })
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "# Hello\n\nThis is **bold** text.";

        // Act
        let html = renderer.render(markdown).expect("Should render markdown");

        // Assert
        assert!(html.contains("<h1>"), "Should contain h1 tag");
        assert!(html.contains("Hello"), "Should contain heading text");
        assert!(html.contains("<strong>"), "Should contain strong tag");
    }

    #[test]
    fn test_render_gfm_tables() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = r#"
| Header 1 | Header 2 |
|----------|----------|
| Cell 1   | Cell 2   |
"#;

        // Act
        let html = renderer.render(markdown).expect("Should render table");

        // Assert
        assert!(html.contains("<table>"), "Should contain table tag");
        assert!(html.contains("<td>"), "Should contain table cell");
        assert!(html.contains("Cell 1"), "Should contain cell text");
    }

    #[test]
    fn test_render_gfm_tasklist() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "- [ ] Unchecked task\n- [x] Checked task\n";

        // Act
        let html = renderer.render(markdown).expect("Should render tasklist");

        // Assert
        assert!(
            html.contains("type=\"checkbox\""),
            "Should contain checkbox"
        );
        assert!(html.contains("disabled"), "Checkboxes should be disabled");
    }

    #[test]
    fn test_render_code_blocks() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "```rust\nfn main() {\n    println!(\"hello\");\n}\n```\n";

        // Act
        let html = renderer.render(markdown).expect("Should render code block");

        // Assert
        assert!(html.contains("<pre>"), "Should contain pre tag: {}", html);
        assert!(
            html.contains("<code class=\"language-rust\">"),
            "Should keep language class: {}",
            html
        );
        assert!(
            html.contains("<span class=\"hljs-"),
            "Should contain syntax highlighting spans: {}",
            html
        );
        assert!(!html.contains("playground"), "Plain mode has no playground");
    }

    #[test]
    fn test_render_strips_raw_html() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "<script>alert('xss')</script>\n\nNormal text.";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            !html.contains("<script>"),
            "Raw HTML must not pass through: {}",
            html
        );
        assert!(html.contains("Normal text"), "Should contain safe text");
    }

    #[test]
    fn test_render_drops_javascript_links() {
        let renderer = MarkdownRenderer::new();
        let html = renderer
            .render("[click](javascript:alert(1))")
            .expect("Should render");
        assert!(!html.contains("javascript:"), "Unsafe scheme kept: {}", html);
    }

    #[test]
    fn test_render_playground_wraps_code_blocks() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "Intro\n\n```js\nconsole.log(1 < 2);\n```\n\nOutro\n";

        // Act
        let html = renderer
            .render_playground(markdown)
            .expect("Should render playground");

        // Assert
        assert!(
            html.contains("<div class=\"playground\" data-language=\"js\"><pre><code class=\"language-js\">"),
            "Should open playground wrapper: {}",
            html
        );
        assert!(
            html.contains("</code></pre></div>"),
            "Should close playground wrapper: {}",
            html
        );
        assert!(html.contains("Outro"));
    }

    #[test]
    fn test_render_playground_leaves_unfenced_code() {
        let renderer = MarkdownRenderer::new();
        let html = renderer
            .render_playground("Use `cargo run` here.")
            .expect("Should render");
        assert!(!html.contains("playground"));
        assert!(html.contains("<code>cargo run</code>"));
    }

    #[test]
    fn test_render_unknown_language_is_escaped() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "```nosuchlang\n<b>&</b>\n```\n";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"), "{}", html);
        assert!(!html.contains("hljs-"));
    }

    #[test]
    fn test_failed_render_falls_back_to_escaped_source() {
        // Arrange
        let content = "```rust\n<script>alert(1)</script>\n```";
        let failure = Err(anyhow::anyhow!("highlighter exploded"));

        // Act
        let html = MarkdownRenderer::or_escaped(content, failure);

        // Assert
        assert!(html.starts_with("<pre>") && html.ends_with("</pre>"), "{}", html);
        assert!(html.contains("&lt;script&gt;"), "Source must be escaped: {}", html);
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_or_escape_succeeds_for_valid_input() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render_or_escape("*hi*", false);
        assert!(html.contains("<em>hi</em>"));
    }
}
