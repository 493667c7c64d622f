//! # Optimistic Vote Ledger
//!
//! Local-only upvote state. A toggle flips membership in a set; the
//! effective upvote count of a project is its recorded count plus one
//! while toggled on. Nothing here is persisted or synchronized — the
//! record itself is never mutated.

use std::collections::HashSet;

use plaza_core::identity::ProjectId;
use plaza_core::project::Project;

/// The set of projects the viewer has optimistically upvoted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteLedger {
    upvoted: HashSet<ProjectId>,
}

impl VoteLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the viewer's upvote on `id`. Returns whether the project
    /// is upvoted after the toggle.
    pub fn toggle(&mut self, id: ProjectId) -> bool {
        if self.upvoted.remove(&id) {
            false
        } else {
            self.upvoted.insert(id);
            true
        }
    }

    /// Whether the viewer currently upvotes `id`.
    pub fn is_upvoted(&self, id: &ProjectId) -> bool {
        self.upvoted.contains(id)
    }

    /// The upvote count to display for `project`: the recorded count
    /// adjusted by the viewer's local toggle.
    pub fn effective_upvotes(&self, project: &Project) -> u64 {
        if self.is_upvoted(&project.id) {
            project.metrics.upvotes.saturating_add(1)
        } else {
            project.metrics.upvotes
        }
    }
}
