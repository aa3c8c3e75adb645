//! Abbreviated page-number strip.

use std::fmt;

/// Strips with at most this many pages are shown in full.
const FULL_STRIP_MAX: usize = 5;

/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    /// Gap marker; never clickable
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{n}"),
            PageItem::Ellipsis => f.write_str("…"),
        }
    }
}

/// Page numbers to display for `current` of `total` pages.
///
/// - `total == 0`: nothing
/// - `total <= 5`: every page
/// - near the start: `1 2 3 4 … total`
/// - near the end: `1 … total-3 total-2 total-1 total`
/// - otherwise: `1 … current-1 current current+1 … total`
pub fn page_sequence(current: usize, total: usize) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total == 0 {
        return Vec::new();
    }
    if total <= FULL_STRIP_MAX {
        return (1..=total).map(Page).collect();
    }
    if current <= 3 {
        return vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)];
    }
    if current >= total - 2 {
        return vec![
            Page(1),
            Ellipsis,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ];
    }
    vec![
        Page(1),
        Ellipsis,
        Page(current - 1),
        Page(current),
        Page(current + 1),
        Ellipsis,
        Page(total),
    ]
}

/// Pagination controls for one category grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub current: usize,
    pub total: usize,
    pub items: Vec<PageItem>,
    /// "Previous" button state; disabled on the first page
    pub prev_enabled: bool,
    /// "Next" button state; disabled on the last page
    pub next_enabled: bool,
    /// Controls are hidden entirely for zero or one page
    pub visible: bool,
}

impl PageControls {
    pub fn new(current: usize, total: usize) -> Self {
        PageControls {
            current,
            total,
            items: page_sequence(current, total),
            prev_enabled: current > 1 && current <= total,
            next_enabled: current >= 1 && current < total,
            visible: total > 1,
        }
    }

    /// Target of the "previous" button, `None` while it is disabled.
    pub fn prev(&self) -> Option<usize> {
        self.prev_enabled.then(|| self.current - 1)
    }

    /// Target of the "next" button, `None` while it is disabled.
    pub fn next(&self) -> Option<usize> {
        self.next_enabled.then(|| self.current + 1)
    }
}
