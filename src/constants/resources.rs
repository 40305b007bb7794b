//! Remote resource names used as cache-key namespaces.
//!
//! Collection names key list queries; singular names key detail queries.
//! Invalidation after a mutation is addressed by these names.

pub const RES_PROBLEMS: &str = "problems";
pub const RES_PROBLEM: &str = "problem";
pub const RES_PAGES: &str = "pages";
pub const RES_PAGE: &str = "page";
pub const RES_PAGE_USERS: &str = "page-users";
pub const RES_ME: &str = "me";
