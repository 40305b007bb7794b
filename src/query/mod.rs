//! The list-view protocol shared by every admin screen.
//!
//! A screen owns a [`PagerState`], derives a [`QueryKey`] from it, fetches
//! through the session's [`QueryCache`], and renders pagination controls
//! from [`compute_window`]. Writes go through the [`MutationBridge`], which
//! invalidates the affected cache entries on success so the next render
//! refetches.

pub mod cache;
pub mod key;
pub mod mutation;
pub mod pager;
pub mod window;

pub use cache::{QueryCache, QueryStatus};
pub use key::QueryKey;
pub use mutation::{Invalidation, MutationBridge, MutationState, MutationStatus};
pub use pager::PagerState;
pub use window::{compute_window, PageSlot};
