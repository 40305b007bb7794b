//! Binding from cached list data to a renderable table view.

use std::sync::Arc;

use crate::constants::PAGE_SIZE_OPTIONS;
use crate::errors::ApiError;
use crate::models::ListPage;
use crate::query::{compute_window, PageSlot, PagerState, QueryCache, QueryKey, QueryStatus};

/// What a list screen renders on a given frame.
///
/// Previous data is deliberately not retained across key changes: a screen
/// whose key has no fresh entry renders `Loading`, never another key's rows.
#[derive(Debug)]
pub enum ListViewState<R> {
    /// No entry yet, or a fetch for this key is in flight.
    Loading,
    /// The last fetch for this key failed; terminal until the next fetch.
    Failed(ApiError),
    Ready(TableView<R>),
}

/// Renderable table: rows plus the pagination control strip.
#[derive(Debug)]
pub struct TableView<R> {
    pub rows: Vec<R>,
    pub controls: PagerControls,
}

/// Everything the pagination strip needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerControls {
    pub current: u64,
    pub page_count: u64,
    pub total: u64,
    pub take: u64,
    pub slots: Vec<PageSlot>,
    pub has_previous: bool,
    pub has_next: bool,
    pub size_options: &'static [u64],
}

impl PagerControls {
    fn new<T>(page: &ListPage<T>, pager: &PagerState) -> Self {
        let page_count = page.meta.page_count;
        let current = pager.page().clamp(1, page_count.max(1));

        Self {
            current,
            page_count,
            total: page.meta.item_count,
            take: pager.take(),
            slots: compute_window(current, page_count),
            has_previous: page.meta.has_previous_page,
            has_next: page.meta.has_next_page,
            size_options: &PAGE_SIZE_OPTIONS,
        }
    }

    /// The controls collapse entirely for a single page of results.
    pub fn is_hidden(&self) -> bool {
        self.page_count <= 1
    }
}

/// Resolve the view state for the screen identified by `key`.
///
/// The caller derives `key` from `pager` on every render, so data fetched
/// for a key the user has since navigated away from is stored elsewhere in
/// the cache and can never appear here. On fresh data the pager learns the
/// server's page count, snapping back if its page fell off the end.
pub fn bind_list<T, R>(
    cache: &QueryCache,
    key: &QueryKey,
    pager: &mut PagerState,
) -> ListViewState<R>
where
    T: Send + Sync + 'static,
    R: for<'a> From<&'a T>,
{
    match cache.peek::<ListPage<T>>(key) {
        Some(page) => {
            pager.record_page_count(page.meta.page_count);
            ListViewState::Ready(build_table(&page, pager))
        }
        None => match cache.status(key) {
            Some(QueryStatus::Error) => match cache.error(key) {
                Some(error) => ListViewState::Failed(error),
                None => ListViewState::Loading,
            },
            _ => ListViewState::Loading,
        },
    }
}

fn build_table<T, R>(page: &Arc<ListPage<T>>, pager: &PagerState) -> TableView<R>
where
    R: for<'a> From<&'a T>,
{
    TableView {
        rows: page.items.iter().map(R::from).collect(),
        controls: PagerControls::new(page, pager),
    }
}
