//! Structured errors for session event dispatch. The pipeline itself is
//! total; only events that name a record the catalog does not hold can
//! fail.

use thiserror::Error;

use plaza_core::identity::ProjectId;

/// Errors during session event handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// An event referenced a project the catalog does not contain.
    #[error("unknown project {id}")]
    UnknownProject {
        /// The identifier the event carried.
        id: ProjectId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_project_names_the_id() {
        let err = SessionError::UnknownProject {
            id: ProjectId::new("p99").unwrap(),
        };
        assert_eq!(err.to_string(), "unknown project p99");
    }
}
