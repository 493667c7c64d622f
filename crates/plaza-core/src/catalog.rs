//! # Project Catalog
//!
//! The read-only project collection backing the feed. Loaded once at
//! session startup and never structurally mutated afterwards; every
//! consumer sees the same ordering, which is what makes stable sorting
//! meaningful downstream.
//!
//! ## Fail-Soft Loading
//!
//! The one real failure mode in the whole engine is a catalog source
//! whose top level is not a list. Policy: recover locally — log an
//! error-level diagnostic and degrade to the empty catalog. The feed
//! then produces an empty, non-paginating result. No error ever reaches
//! the rendering layer. Individual records that fail validation are
//! skipped with a warning rather than poisoning the rest of the load.

use serde_json::Value;

use crate::identity::ProjectId;
use crate::project::Project;

/// The label that stands for "no category restriction" in filter UIs.
pub const ALL_CATEGORIES: &str = "All";

/// An immutable, ordered collection of project records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Create a catalog from an already-validated list of projects.
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// The empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a catalog from a parsed JSON document, degrading to the
    /// empty catalog if the top level is not a list.
    pub fn from_json_value(value: Value) -> Self {
        let Value::Array(items) = value else {
            tracing::error!(
                kind = value_kind(&value),
                "catalog source is not a list; degrading to empty catalog"
            );
            return Self::empty();
        };

        let total = items.len();
        let mut projects = Vec::with_capacity(total);
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<Project>(item) {
                Ok(project) => projects.push(project),
                Err(err) => {
                    tracing::warn!(index, %err, "skipping invalid catalog record");
                }
            }
        }
        tracing::debug!(loaded = projects.len(), total, "catalog loaded");
        Self { projects }
    }

    /// Load a catalog from JSON text. Unparseable text degrades to the
    /// empty catalog under the same fail-soft policy as a non-list root.
    pub fn from_json_str(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::from_json_value(value),
            Err(err) => {
                tracing::error!(%err, "catalog source is not valid JSON; degrading to empty catalog");
                Self::empty()
            }
        }
    }

    /// All projects, in catalog order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the catalog holds no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Look up a project by id.
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| &project.id == id)
    }

    /// Whether a project with `id` exists.
    pub fn contains(&self, id: &ProjectId) -> bool {
        self.get(id).is_some()
    }

    /// The category labels offered by filter UIs: [`ALL_CATEGORIES`]
    /// followed by every distinct tag (case-insensitively deduplicated,
    /// first-seen casing kept), sorted alphabetically.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for project in &self.projects {
            for tag in &project.tags {
                if !seen.iter().any(|s| s.eq_ignore_ascii_case(tag)) {
                    seen.push(tag.clone());
                }
            }
        }
        seen.sort_by(|a, b| a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase()));
        let mut labels = Vec::with_capacity(seen.len() + 1);
        labels.push(ALL_CATEGORIES.to_string());
        labels.extend(seen);
        labels
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
