//! Pagination Math
//!
//! Pure page derivation for the todo pager. Pages are 1-indexed.

use std::ops::Range;

/// Number of pages needed for `len` items. Zero items means zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// First index of `page` in the full set
pub fn start_index(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1) * page_size
}

/// Slice of `items` visible on `page`, clipped to the set. Empty when out of range.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}

fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = start_index(page, page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Snapshot of a paged list: how many items, how many per page, where we are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    len: usize,
    page_size: usize,
    current_page: usize,
}

impl Paginator {
    pub fn new(len: usize, page_size: usize, current_page: usize) -> Self {
        Self {
            len,
            page_size,
            current_page: current_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.len, self.page_size)
    }

    /// The current page's part of `items`
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.current_page, self.page_size)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    /// False on the last page and when there are no pages at all
    pub fn can_go_next(&self) -> bool {
        let total = self.total_pages();
        total != 0 && self.current_page < total
    }

    /// Step back one page. Returns false (and stays put) on page 1.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Step forward one page. Returns false (and stays put) on the last page.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// "Page X of Y"
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages())
    }
}
