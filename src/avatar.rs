//! Fallback avatars for comment authors
//!
//! Authors without an avatar URL get an initial on a pastel disc, colored
//! deterministically from their login.

use maud::{Markup, PreEscaped, html};

use crate::highlight::escape_html;

const COLORS: &[&str] = &[
    "#dc8a78", "#dd7878", "#ea76cb", "#eba0ac", "#ca9ee6", "#b4befe", "#8caaee", "#85c1dc",
    "#81c8be", "#94e2d5", "#a6d189", "#c6d57e", "#e5c890", "#ef9f76", "#fab387", "#f9e2af",
];

fn hash(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    s.trim()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ b as u64).wrapping_mul(PRIME))
}

fn initial(login: &str) -> String {
    login
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Generate SVG avatar from login
pub fn generate_svg(login: &str, size: u32) -> String {
    let bg = COLORS[(hash(login) % COLORS.len() as u64) as usize];
    let letter = escape_html(&initial(login));

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100"><circle cx="50" cy="50" r="50" fill="{bg}"/><text x="50" y="50" dy="0.35em" text-anchor="middle" font-family="sans-serif" font-size="48" fill="white">{letter}</text></svg>"##
    )
}

/// Create inline SVG avatar element
pub fn render(login: &str, size: u32) -> Markup {
    html! { span class="avatar" { (PreEscaped(generate_svg(login, size))) } }
}
