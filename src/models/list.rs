//! Paginated list envelope returned by every collection endpoint.

use serde::Deserialize;

/// Pagination metadata attached to a list response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total number of items across all pages.
    pub item_count: u64,
    /// Total number of pages at the requested page size.
    pub page_count: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

/// One page of a remote collection.
///
/// Both fields are mandatory; an envelope missing `items` or `meta` fails
/// deserialization and surfaces as a server error at the API boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> ListPage<T> {
    /// Whether the server-reported page count agrees with the item count at
    /// the given page size. Used for a diagnostic warning only; the server
    /// value stays authoritative.
    pub fn meta_consistent(&self, take: u64) -> bool {
        if take == 0 {
            return false;
        }
        self.meta.page_count == self.meta.item_count.div_ceil(take)
    }
}
