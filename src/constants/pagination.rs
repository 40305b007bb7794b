//! Pagination constants for list screens.

/// Page sizes offered by every list screen's size selector.
pub const PAGE_SIZE_OPTIONS: [u64; 5] = [5, 10, 15, 20, 50];

/// Default number of items per page when not chosen explicitly.
pub const DEFAULT_PAGE_SIZE: u64 = 5;

/// Default starting page number.
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Automatic retries for the current-user lookup. List fetches get none.
pub const CURRENT_USER_RETRY_LIMIT: u32 = 1;
