//! # plaza-feed — The Showcase Feed Pipeline
//!
//! Everything between the catalog and the rendered grid of cards:
//!
//! - **Query** ([`query`]): the category filter × sort key pair that
//!   fully determines the feed ordering.
//!
//! - **Pipeline** ([`pipeline`]): pure `filter → stable sort → paginate`
//!   functions. Deterministic; ties resolve to catalog order.
//!
//! - **Window** ([`window`]): the infinite-scroll state machine — page
//!   cursor, visible slice, `has_more`, and the single-in-flight load
//!   guard that keeps scroll-visibility signals from interleaving page
//!   loads.
//!
//! The render boundary is `(visible, loading, has_more)` out and one
//! signal in: "the last rendered card became visible", handled by
//! [`Feed::advance`].

pub mod pipeline;
pub mod query;
pub mod window;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export primary types.
pub use pipeline::{compute_visible, filter_and_sort, page_window, FeedPage, PAGE_SIZE};
pub use query::{CategoryFilter, FeedQuery, ParseSortKeyError, SortKey};
pub use window::{Feed, PageLoad};
