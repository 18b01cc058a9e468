//! Current page location.
//!
//! Views read the origin, path, and query string from an explicit
//! `Location` value rather than an ambient global, so a page can be rendered
//! for any address and navigation can be observed by whoever owns it.

use anyhow::{Context, Result};
use url::Url;

/// Origin, path, and query string of the page being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    origin: String,
    pathname: String,
    search: String,
}

impl Location {
    /// Creates location from its parts.
    ///
    /// `search` may be given with or without the leading `?`. An empty
    /// search is stored as empty.
    pub fn new(
        origin: impl Into<String>,
        pathname: impl Into<String>,
        search: impl AsRef<str>,
    ) -> Self {
        Self {
            origin: origin.into(),
            pathname: pathname.into(),
            search: normalize_search(search.as_ref()),
        }
    }

    /// Parses absolute URL into location.
    ///
    /// # Errors
    ///
    /// Returns error if the URL is malformed or has no host.
    pub fn parse(url: &str) -> Result<Self> {
        let parsed = Url::parse(url).with_context(|| format!("Invalid location URL: {}", url))?;
        if !parsed.has_host() {
            anyhow::bail!("Location URL has no host: {}", url);
        }
        Ok(Self::new(
            parsed.origin().ascii_serialization(),
            parsed.path(),
            parsed.query().unwrap_or(""),
        ))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Query string including leading `?`, or empty.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replaces query string, keeping origin and path.
    pub fn replace_query(&mut self, search: &str) {
        self.search = normalize_search(search);
    }

    /// Absolute link to an element on this page.
    pub fn fragment_link(&self, fragment: impl std::fmt::Display) -> String {
        format!("{}{}#{}", self.origin, self.pathname, fragment)
    }

    /// Full address of this page.
    pub fn href(&self) -> String {
        format!("{}{}{}", self.origin, self.pathname, self.search)
    }
}

fn normalize_search(search: &str) -> String {
    let trimmed = search.strip_prefix('?').unwrap_or(search);
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("?{}", trimmed)
    }
}
