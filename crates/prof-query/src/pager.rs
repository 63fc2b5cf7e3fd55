//! Page arithmetic for list views.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Current page (1-based) and page size. The item count is supplied per
/// call because it changes with every filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// A zero page size is treated as one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size)
    }

    /// Index range of the current page, clipped to `total_items`.
    #[must_use]
    pub fn window(&self, total_items: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.page_size).min(total_items);
        let end = start.saturating_add(self.page_size).min(total_items);
        start..end
    }

    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.window(items.len())]
    }

    pub fn next(&mut self, total_items: usize) {
        if self.page < self.total_pages(total_items) {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Jump to a typed page number. Out-of-range input leaves the page
    /// unchanged and returns `false`.
    pub fn goto(&mut self, page: usize, total_items: usize) -> bool {
        if (1..=self.total_pages(total_items)).contains(&page) {
            self.page = page;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Pull the page back inside `[1, max(1, total_pages)]` after the list
    /// shrinks.
    pub fn clamp(&mut self, total_items: usize) {
        self.page = self.page.min(self.total_pages(total_items).max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hundred_twenty_items_span_three_pages() {
        let mut pager = Pager::new(50);
        assert_eq!(pager.total_pages(120), 3);
        assert!(pager.goto(3, 120));
        assert_eq!(pager.window(120), 100..120);
        pager.next(120);
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn empty_list_has_zero_pages_and_empty_window() {
        let mut pager = Pager::default();
        assert_eq!(pager.total_pages(0), 0);
        assert_eq!(pager.window(0), 0..0);
        pager.next(0);
        assert_eq!(pager.page(), 1);
        assert!(!pager.goto(1, 0));
    }

    #[test]
    fn prev_stops_at_one() {
        let mut pager = Pager::new(10);
        pager.prev();
        assert_eq!(pager.page(), 1);
        pager.next(25);
        pager.next(25);
        pager.prev();
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn goto_outside_range_is_ignored() {
        let mut pager = Pager::new(50);
        assert!(pager.goto(2, 120));
        assert!(!pager.goto(0, 120));
        assert!(!pager.goto(4, 120));
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn window_clips_when_list_shrinks() {
        let mut pager = Pager::new(50);
        pager.goto(3, 120);
        assert_eq!(pager.window(30), 30..30);
        assert!(pager.slice(&[0u8; 30]).is_empty());
    }

    #[test]
    fn clamp_after_shrink() {
        let mut pager = Pager::new(50);
        pager.goto(3, 120);
        pager.clamp(60);
        assert_eq!(pager.page(), 2);
        pager.clamp(0);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn zero_page_size_is_one() {
        assert_eq!(Pager::new(0).page_size(), 1);
    }
}
