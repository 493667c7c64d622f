//! # Feed Query
//!
//! The pair of inputs that fully determines the filtered, sorted
//! collection: a category filter and a sort key. A query is a pure value
//! — recomputing the pipeline with an identical query over an identical
//! catalog yields an identical ordering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use plaza_core::catalog::ALL_CATEGORIES;
use plaza_core::project::Project;

/// Error parsing a sort key from its wire label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort key {0:?} (expected one of: most_visited, most_upvoted, most_commented, most_shared, newest)")]
pub struct ParseSortKeyError(pub String);

/// The ordering criterion applied after filtering. All keys sort
/// descending; `Newest` means creation timestamp descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Visit count, descending.
    MostVisited,
    /// Upvote count, descending.
    MostUpvoted,
    /// Comment count, descending.
    MostCommented,
    /// Share count, descending.
    MostShared,
    /// Creation timestamp, descending (newest first). The initial sort.
    #[default]
    Newest,
}

impl SortKey {
    /// All sort keys, in the order filter UIs present them.
    pub const ALL: [SortKey; 5] = [
        Self::MostVisited,
        Self::MostUpvoted,
        Self::MostCommented,
        Self::MostShared,
        Self::Newest,
    ];

    /// The canonical wire label of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MostVisited => "most_visited",
            Self::MostUpvoted => "most_upvoted",
            Self::MostCommented => "most_commented",
            Self::MostShared => "most_shared",
            Self::Newest => "newest",
        }
    }

    /// The human-readable label shown in filter UIs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MostVisited => "Most Visited",
            Self::MostUpvoted => "Most Upvoted",
            Self::MostCommented => "Most Commented",
            Self::MostShared => "Most Shared",
            Self::Newest => "Newest",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "most_visited" => Ok(Self::MostVisited),
            "most_upvoted" => Ok(Self::MostUpvoted),
            "most_commented" => Ok(Self::MostCommented),
            "most_shared" => Ok(Self::MostShared),
            "newest" => Ok(Self::Newest),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

/// The tag-based inclusion predicate applied to the catalog.
///
/// The empty string and the `"All"` sentinel both mean unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// No restriction; every project passes.
    #[default]
    Unrestricted,
    /// Retain only projects with at least one tag case-insensitively
    /// equal to this label.
    Category(String),
}

impl CategoryFilter {
    /// Build a filter from a UI label. `""` and `"All"` (exact) map to
    /// [`CategoryFilter::Unrestricted`]; anything else is a category.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        if label.is_empty() || label == ALL_CATEGORIES {
            Self::Unrestricted
        } else {
            Self::Category(label)
        }
    }

    /// Whether `project` passes this filter.
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Category(label) => project.has_tag(label),
        }
    }

    /// The label shown in filter UIs.
    pub fn label(&self) -> &str {
        match self {
            Self::Unrestricted => ALL_CATEGORIES,
            Self::Category(label) => label,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category filter × sort key. Determines the feed ordering completely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedQuery {
    /// The category filter.
    pub category: CategoryFilter,
    /// The sort key.
    pub sort: SortKey,
}

impl FeedQuery {
    /// A query with the given filter and sort.
    pub fn new(category: CategoryFilter, sort: SortKey) -> Self {
        Self { category, sort }
    }

    /// This query with a different category.
    pub fn with_category(&self, category: CategoryFilter) -> Self {
        Self {
            category,
            sort: self.sort,
        }
    }

    /// This query with a different sort key.
    pub fn with_sort(&self, sort: SortKey) -> Self {
        Self {
            category: self.category.clone(),
            sort,
        }
    }
}
