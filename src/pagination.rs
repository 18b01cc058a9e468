//! Comment pagination derived from the current location.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::location::Location;
use crate::query;
use crate::util::clamp;

/// Default number of comments per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Positive number of comments fetched per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroU32);

impl PageSize {
    pub fn new(size: u32) -> Option<Self> {
        NonZeroU32::new(size).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroU32::MIN.saturating_add(DEFAULT_PAGE_SIZE - 1))
    }
}

impl FromStr for PageSize {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let size: u32 = s
            .trim()
            .parse()
            .with_context(|| format!("Page size must be a positive integer: {:?}", s))?;
        Self::new(size).with_context(|| format!("Page size must be greater than zero: {:?}", s))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved `{article, page, page_size}` triple driving a comments fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationQuery {
    pub article: u64,
    pub page: u32,
    pub page_size: PageSize,
}

/// Derives pagination queries with a page size fixed at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationState {
    page_size: PageSize,
}

impl PaginationState {
    pub fn new(page_size: PageSize) -> Self {
        Self { page_size }
    }

    /// Resolves pagination query for an article at a location.
    ///
    /// Reads the `page` parameter from the location's query string. A missing
    /// or non-numeric value resolves to page 1, and numeric values below 1
    /// are clamped up to 1.
    pub fn resolve(&self, article: u64, location: &Location) -> PaginationQuery {
        PaginationQuery {
            article,
            page: parse_page(location.search()),
            page_size: self.page_size,
        }
    }
}

/// Extracts 1-based page number from a query string.
pub fn parse_page(search: &str) -> u32 {
    query::first(search, "page")
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .map(|page| clamp(page, 1, i64::from(u32::MAX)) as u32)
        .unwrap_or(1)
}
