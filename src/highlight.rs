//! Syntax highlighting with syntect.
//!
//! Grammars are looked up in an explicit registry by language identifier.
//! Identifiers syntect does not know resolve to `Grammar::Plain`, which
//! renders escaped text without highlight classes.

use anyhow::{Context, Result};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// CSS class prefix for highlighted spans.
pub const CLASS_PREFIX: &str = "hljs-";

/// Grammar used to highlight a code block.
#[derive(Debug, Clone, Copy)]
pub enum Grammar<'a> {
    Syntax(&'a SyntaxReference),
    Plain,
}

impl Grammar<'_> {
    /// Returns the grammar name as string.
    pub fn name(&self) -> &str {
        match self {
            Grammar::Syntax(syntax) => &syntax.name,
            Grammar::Plain => "plain",
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Grammar::Plain)
    }
}

/// Registry of syntax grammars keyed by language identifier.
pub struct GrammarRegistry {
    syntax_set: SyntaxSet,
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarRegistry {
    /// Creates registry with syntect's bundled syntax definitions.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Looks up grammar by identifier.
    ///
    /// Matches syntect tokens first (`rust`, `python`), then file extensions
    /// (`rs`, `py`). Empty or unknown identifiers and the explicit `plain`
    /// and `text` identifiers yield `Grammar::Plain`.
    pub fn lookup(&self, identifier: &str) -> Grammar<'_> {
        let identifier = identifier.trim();
        if identifier.is_empty()
            || identifier.eq_ignore_ascii_case("plain")
            || identifier.eq_ignore_ascii_case("text")
        {
            return Grammar::Plain;
        }

        self.syntax_set
            .find_syntax_by_token(identifier)
            .or_else(|| self.syntax_set.find_syntax_by_extension(identifier))
            .map_or(Grammar::Plain, Grammar::Syntax)
    }

    /// Highlights source code for a language identifier.
    ///
    /// # Arguments
    ///
    /// * `code`: Source code to highlight
    /// * `identifier`: Language identifier from the code fence
    ///
    /// # Returns
    ///
    /// HTML string with `<span class="hljs-*">` tags, or escaped plain text
    /// for the plain grammar
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails to parse a line
    pub fn highlight(&self, code: &str, identifier: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let syntax = match self.lookup(identifier) {
            Grammar::Syntax(syntax) => syntax,
            Grammar::Plain => return Ok(escape_html(code)),
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed {
                prefix: CLASS_PREFIX,
            },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }
}

/// Escapes HTML special characters.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
