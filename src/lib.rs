//! Client core for the content/problem management admin console.
//!
//! This crate talks to the platform's REST API and implements the shared
//! list-view machinery every admin screen is built on: a session-scoped
//! query cache with request deduplication, mutation-driven invalidation,
//! pager state, and page-window math for the pagination controls.

pub mod api;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod notify;
pub mod query;
pub mod services;
pub mod utils;
pub mod validators;
pub mod views;

pub use api::ApiClient;
pub use errors::ApiError;
pub use query::{PagerState, QueryCache, QueryKey};
