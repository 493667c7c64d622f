//! # Project Records
//!
//! The showcased project record and its engagement metrics. Records are
//! structurally immutable for the lifetime of a session — the only thing
//! that ever changes about a project is its *effective* upvote count,
//! which lives in the session's local vote ledger, never in the record.
//!
//! The serde shape uses camelCase field names (`createdAt`) to match the
//! catalog file format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::ProjectId;
use crate::media::MediaRef;

/// Effective upvote count above which a project earns the "Top Project"
/// badge in card rendering.
pub const TOP_PROJECT_UPVOTES: u64 = 400;

/// Engagement metrics for a project. All counts are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    /// Number of upvotes.
    pub upvotes: u64,
    /// Number of comments.
    pub comments: u64,
    /// Number of shares.
    pub shares: u64,
    /// Number of visits.
    pub visits: u64,
}

impl ProjectMetrics {
    /// Whether `effective_upvotes` qualifies for the "Top Project" badge.
    ///
    /// Takes the effective count as a parameter so the session's local
    /// vote ledger can be applied before the threshold check.
    pub fn is_top_project(effective_upvotes: u64) -> bool {
        effective_upvotes > TOP_PROJECT_UPVOTES
    }
}

/// The builder who submitted a project: display name plus avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Builder {
    /// Display name.
    pub name: String,
    /// Avatar image reference.
    pub avatar: MediaRef,
}

/// A user-submitted project shown in the showcase feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier.
    pub id: ProjectId,
    /// Project title.
    pub title: String,
    /// Short description shown on the card.
    pub description: String,
    /// Thumbnail image reference.
    pub thumbnail: MediaRef,
    /// The builder who submitted the project.
    pub builder: Builder,
    /// Engagement metrics.
    pub metrics: ProjectMetrics,
    /// Tags, order preserved for display. Filtering treats them as a
    /// case-insensitive set.
    pub tags: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Whether any tag matches `category` case-insensitively.
    pub fn has_tag(&self, category: &str) -> bool {
        self.tags.iter().any(|tag| tag.eq_ignore_ascii_case(category))
    }
}
