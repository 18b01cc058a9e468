//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module renders article and comment bodies using comrak with GFM
//! extensions. Output is safe HTML: raw HTML in the source is omitted and
//! dangerous link schemes are dropped. Fenced code blocks are highlighted
//! through the grammar registry.

mod renderer;

pub use renderer::MarkdownRenderer;
