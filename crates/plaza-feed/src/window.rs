//! # Feed Window State Machine
//!
//! The stateful side of the feed: a 1-based page cursor, the
//! materialized visible slice, and the `loading` guard that keeps page
//! loads from interleaving.
//!
//! ## Load Protocol
//!
//! Loads are asynchronous from the driver's point of view (the original
//! UI simulated network latency before each page), so the window hands
//! out an opaque [`PageLoad`] token when a load begins and applies it in
//! [`Feed::complete`]. The token records the page and query it was
//! issued for; a token that no longer matches the current cursor or
//! query — because the query changed mid-flight — is dropped as stale.
//! Tokens are not cloneable, so a load cannot be applied twice.
//!
//! Invariants:
//!
//! - At most one load is in flight: [`Feed::advance`] refuses while
//!   `loading` is set.
//! - Advancing past the end is a no-op: [`Feed::advance`] refuses while
//!   `has_more` is false.
//! - A query change resets the window synchronously — page 1, empty
//!   slice — before any recomputation, so stale-filtered items are never
//!   shown.

use plaza_core::project::Project;

use crate::pipeline::compute_visible;
use crate::query::FeedQuery;

/// An in-flight page load: the page and query it was issued for.
///
/// Deliberately neither `Clone` nor constructible outside this module;
/// the only way to obtain one is from [`Feed::new`], [`Feed::set_query`],
/// or [`Feed::advance`], and the only thing to do with it is pass it to
/// [`Feed::complete`].
#[derive(Debug)]
pub struct PageLoad {
    page: u32,
    query: FeedQuery,
}

impl PageLoad {
    /// The 1-based page this load will materialize.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// The query this load was issued under.
    pub fn query(&self) -> &FeedQuery {
        &self.query
    }
}

/// The infinite-scroll window over the filtered, sorted catalog.
#[derive(Debug)]
pub struct Feed {
    query: FeedQuery,
    page: u32,
    loading: bool,
    visible: Vec<Project>,
    has_more: bool,
}

impl Feed {
    /// Create a window for `query` with the page-1 load already pending.
    pub fn new(query: FeedQuery) -> (Self, PageLoad) {
        let feed = Self {
            query: query.clone(),
            page: 1,
            loading: true,
            visible: Vec::new(),
            has_more: true,
        };
        let load = PageLoad { page: 1, query };
        (feed, load)
    }

    /// Change the query. Any actual change synchronously resets the
    /// window (page 1, empty slice) and issues the page-1 load; setting
    /// an identical query is not a change and returns `None`.
    ///
    /// A load already in flight for the old query will be dropped as
    /// stale when it completes.
    pub fn set_query(&mut self, query: FeedQuery) -> Option<PageLoad> {
        if query == self.query {
            return None;
        }
        tracing::debug!(category = %query.category, sort = %query.sort, "feed query changed; resetting window");
        self.query = query.clone();
        self.page = 1;
        self.visible.clear();
        self.has_more = true;
        self.loading = true;
        Some(PageLoad { page: 1, query })
    }

    /// Handle the scroll-visibility signal: request the next page.
    ///
    /// Refused (returns `None`) while a load is in flight or when the
    /// filtered collection is exhausted, so duplicate signals and
    /// past-the-end signals are both no-ops.
    pub fn advance(&mut self) -> Option<PageLoad> {
        if self.loading {
            tracing::debug!(page = self.page, "advance ignored: load in flight");
            return None;
        }
        if !self.has_more {
            tracing::debug!(page = self.page, "advance ignored: no more pages");
            return None;
        }
        self.page += 1;
        self.loading = true;
        Some(PageLoad {
            page: self.page,
            query: self.query.clone(),
        })
    }

    /// Apply a completed load by running the pure pipeline over
    /// `projects` for the load's page.
    ///
    /// A token whose page or query no longer matches the window is
    /// dropped without effect — the query changed while the load was in
    /// flight and a fresh page-1 load is already pending.
    pub fn complete(&mut self, load: PageLoad, projects: &[Project]) {
        if load.query != self.query || load.page != self.page {
            tracing::debug!(
                stale_page = load.page,
                current_page = self.page,
                "stale page load dropped"
            );
            return;
        }
        let result = compute_visible(projects, &self.query, self.page);
        self.visible = result.visible;
        self.has_more = result.has_more;
        self.loading = false;
    }

    /// The current query.
    pub fn query(&self) -> &FeedQuery {
        &self.query
    }

    /// The current 1-based page cursor.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Whether a page load is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Whether the filtered collection extends past the visible slice.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// The visible slice, in feed order.
    pub fn visible(&self) -> &[Project] {
        &self.visible
    }
}
