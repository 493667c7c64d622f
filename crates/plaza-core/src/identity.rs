//! # Identity Newtypes
//!
//! Domain-primitive newtypes for Plaza identifiers. Each identifier is a
//! distinct type — you cannot pass a [`UserId`] where a [`ProjectId`] is
//! expected.
//!
//! ## Validation
//!
//! Both identifiers are caller-supplied strings (the catalog assigns ids
//! like `"p7"`, the viewer account ids like `"user123"`). They are
//! validated to be non-empty at construction time; no further format is
//! imposed because id schemes vary across catalog sources.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A unique identifier for a showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectId(String);

impl_validating_deserialize!(ProjectId);

impl ProjectId {
    /// Create a project identifier from a string, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidProjectId`] if the string is
    /// empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidProjectId);
        }
        Ok(Self(trimmed))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProjectId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A unique identifier for a user account (a project builder or the
/// session's viewer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserId(String);

impl_validating_deserialize!(UserId);

impl UserId {
    /// Create a user identifier from a string, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUserId`] if the string is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidUserId);
        }
        Ok(Self(trimmed))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_id_valid() {
        let pid = ProjectId::new("p7").unwrap();
        assert_eq!(pid.as_str(), "p7");
    }

    #[test]
    fn project_id_rejects_empty() {
        assert!(ProjectId::new("").is_err());
        assert!(ProjectId::new("   ").is_err());
    }

    #[test]
    fn project_id_trims_whitespace() {
        let pid = ProjectId::new("  p7  ").unwrap();
        assert_eq!(pid.as_str(), "p7");
    }

    #[test]
    fn project_id_display() {
        let pid = ProjectId::new("p7").unwrap();
        assert_eq!(format!("{pid}"), "p7");
    }

    #[test]
    fn project_id_serde_roundtrip() {
        let pid = ProjectId::new("p7").unwrap();
        let json = serde_json::to_string(&pid).unwrap();
        assert_eq!(json, "\"p7\"");
        let deser: ProjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(pid, deser);
    }

    #[test]
    fn project_id_deserialize_rejects_empty() {
        let result: Result<ProjectId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn user_id_valid() {
        let uid = UserId::new("user123").unwrap();
        assert_eq!(uid.as_str(), "user123");
    }

    #[test]
    fn user_id_rejects_empty() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("\t").is_err());
    }

    #[test]
    fn user_id_from_str() {
        let uid: UserId = "u1".parse().unwrap();
        assert_eq!(uid.as_str(), "u1");
    }

    #[test]
    fn ids_hash_into_sets() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ProjectId::new("p1").unwrap());
        set.insert(ProjectId::new("p2").unwrap());
        assert_eq!(set.len(), 2);
        assert!(set.contains(&ProjectId::new("p1").unwrap()));
    }
}
