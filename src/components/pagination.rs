//! Pagination control component

use maud::{Markup, html};

use crate::pagination::PageSize;
use crate::query::{QueryValue, create_query_url};
use crate::util::clamp;

/// Returns number of pages needed for `total` items.
pub fn page_count(total: u64, page_size: PageSize) -> u32 {
    let pages = total.div_ceil(u64::from(page_size.get()));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Page numbers shown on each side of the current page.
pub const PAGE_WINDOW: u32 = 2;

/// Returns page numbers to display, `None` marking an elided gap.
///
/// The first and last pages are always shown, plus `PAGE_WINDOW` pages on
/// each side of `current`. A gap of exactly one page is filled in rather
/// than elided.
pub fn page_window(current: u32, pages: u32) -> Vec<Option<u32>> {
    let start = current.saturating_sub(PAGE_WINDOW).max(1);
    let end = current.saturating_add(PAGE_WINDOW).min(pages);

    let mut items = Vec::new();
    if start > 1 {
        items.push(Some(1));
        match start {
            2 => {}
            3 => items.push(Some(2)),
            _ => items.push(None),
        }
    }
    items.extend((start..=end).map(Some));
    if end < pages {
        match pages - end {
            1 => {}
            2 => items.push(Some(pages - 1)),
            _ => items.push(None),
        }
        items.push(Some(pages));
    }
    items
}

/// Returns link target for a page.
pub fn page_href(page: u32) -> String {
    create_query_url(&[("page", QueryValue::from(page))])
}

/// Renders previous/next links and page numbers
///
/// Renders nothing when all items fit on one page. The current page is
/// clamped into the valid range before rendering, so an out of range query
/// still highlights a reachable page. Long page ranges are elided around
/// the current page, see `page_window`.
///
/// # Arguments
///
/// * `page`: Requested page (1-based)
/// * `page_size`: Items per page
/// * `total`: Total number of items
///
/// # Returns
///
/// Navigation markup, empty for a single page
pub fn pagination(page: u32, page_size: PageSize, total: u64) -> Markup {
    let pages = page_count(total, page_size);
    if pages <= 1 {
        return html! {};
    }
    let current = clamp(page, 1, pages);

    html! {
        nav class="pagination" aria-label="Pagination" {
            @if current > 1 {
                a class="page-link page-prev" href=(page_href(current - 1)) {
                    i class="ph ph-caret-left" {}
                }
            } @else {
                span class="page-link page-prev disabled" {
                    i class="ph ph-caret-left" {}
                }
            }
            @for item in page_window(current, pages) {
                @match item {
                    Some(n) => {
                        @if n == current {
                            span class="page-link page-current" aria-current="page" { (n) }
                        } @else {
                            a class="page-link" href=(page_href(n)) { (n) }
                        }
                    }
                    None => {
                        span class="page-link page-gap" { "…" }
                    }
                }
            }
            @if current < pages {
                a class="page-link page-next" href=(page_href(current + 1)) {
                    i class="ph ph-caret-right" {}
                }
            } @else {
                span class="page-link page-next disabled" {
                    i class="ph ph-caret-right" {}
                }
            }
        }
    }
}
