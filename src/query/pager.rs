//! Per-screen pagination state.

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// Current page and page size of one list screen.
///
/// Pure value type: the only side effect of changing it is that the screen's
/// query key changes, which drives a refetch through the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerState {
    page: u64,
    take: u64,
    /// Total page count, once a fetch has reported it. Used to clamp
    /// `set_page` at the upper end.
    page_count: Option<u64>,
}

impl Default for PagerState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PagerState {
    pub fn new(take: u64) -> Self {
        let take = if PAGE_SIZE_OPTIONS.contains(&take) {
            take
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self {
            page: DEFAULT_PAGE_NUMBER,
            take,
            page_count: None,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn take(&self) -> u64 {
        self.take
    }

    pub fn page_count(&self) -> Option<u64> {
        self.page_count
    }

    /// Move to a page, clamping silently into `[1, page_count]`. The upper
    /// bound only applies once a fetch has reported the page count.
    pub fn set_page(&mut self, page: u64) {
        let mut page = page.max(DEFAULT_PAGE_NUMBER);
        if let Some(count) = self.page_count {
            page = page.min(count.max(1));
        }
        self.page = page;
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Change the page size and reset to the first page. Sizes outside the
    /// selector's options are ignored.
    pub fn set_take(&mut self, take: u64) {
        if !PAGE_SIZE_OPTIONS.contains(&take) {
            return;
        }
        self.take = take;
        self.page = DEFAULT_PAGE_NUMBER;
        self.page_count = None;
    }

    /// Record the page count reported by the latest fetch. If the current
    /// page fell off the end (items were deleted), snap back to the last
    /// valid page.
    pub fn record_page_count(&mut self, count: u64) {
        self.page_count = Some(count);
        if self.page > count.max(1) {
            self.page = count.max(1);
        }
    }
}
