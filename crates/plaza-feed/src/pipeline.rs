//! # Pure Feed Pipeline
//!
//! `filter → stable sort → paginate`, as total functions over a valid
//! catalog slice. No hidden state: the same `(projects, query, page)`
//! always yields the same page.
//!
//! Stability matters here. The catalog order is the tiebreaker for equal
//! sort keys, so recomputing the pipeline never reorders equal-key items
//! across pages — a card cannot jump between pages because a later load
//! resolved a tie differently.

use plaza_core::project::Project;

use crate::query::{FeedQuery, SortKey};

/// Number of projects per page. Fixed for the lifetime of a session.
pub const PAGE_SIZE: usize = 6;

/// One computed page of the feed: the visible slice (all pages up to and
/// including the requested one) and whether more items remain.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPage {
    /// The visible projects, in feed order.
    pub visible: Vec<Project>,
    /// Whether the filtered collection extends past the visible slice.
    pub has_more: bool,
}

impl FeedPage {
    /// An empty, non-paginating page.
    pub fn empty() -> Self {
        Self {
            visible: Vec::new(),
            has_more: false,
        }
    }
}

/// Filter `projects` by the query's category, then stable-sort by its
/// sort key. Returns references in feed order; ties keep catalog order.
pub fn filter_and_sort<'a>(projects: &'a [Project], query: &FeedQuery) -> Vec<&'a Project> {
    let mut filtered: Vec<&Project> = projects
        .iter()
        .filter(|project| query.category.matches(project))
        .collect();

    // Vec::sort_by is stable; comparing b to a gives descending order
    // while preserving input order for equal keys.
    match query.sort {
        SortKey::MostVisited => filtered.sort_by(|a, b| b.metrics.visits.cmp(&a.metrics.visits)),
        SortKey::MostUpvoted => filtered.sort_by(|a, b| b.metrics.upvotes.cmp(&a.metrics.upvotes)),
        SortKey::MostCommented => {
            filtered.sort_by(|a, b| b.metrics.comments.cmp(&a.metrics.comments))
        }
        SortKey::MostShared => filtered.sort_by(|a, b| b.metrics.shares.cmp(&a.metrics.shares)),
        SortKey::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    filtered
}

/// The visible window for a 1-based `page`: the first `page × PAGE_SIZE`
/// items of `ordered`, plus whether anything remains beyond it.
pub fn page_window<'a>(ordered: &[&'a Project], page: u32) -> (Vec<&'a Project>, bool) {
    let end = (page as usize).saturating_mul(PAGE_SIZE).min(ordered.len());
    let visible = ordered[..end].to_vec();
    let has_more = end < ordered.len();
    (visible, has_more)
}

/// Run the full pipeline and materialize the page.
pub fn compute_visible(projects: &[Project], query: &FeedQuery, page: u32) -> FeedPage {
    let ordered = filter_and_sort(projects, query);
    let (visible, has_more) = page_window(&ordered, page);
    FeedPage {
        visible: visible.into_iter().cloned().collect(),
        has_more,
    }
}
