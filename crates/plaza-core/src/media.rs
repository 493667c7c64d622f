//! # Media References
//!
//! References to external images (project thumbnails, builder avatars).
//! Image loading is a rendering-collaborator concern; when a collaborator
//! reports a load failure, the reference degrades to a fixed placeholder
//! instead of propagating an error.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a project thumbnail fails to load.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/400x200?text=Project+Image";

/// Placeholder shown when a builder avatar fails to load.
pub const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/40x40?text=User";

/// The kind of image a media reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// A project's thumbnail image.
    Thumbnail,
    /// A user's avatar image.
    Avatar,
}

impl MediaKind {
    /// The placeholder reference for this kind of image.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Thumbnail => PLACEHOLDER_THUMBNAIL,
            Self::Avatar => PLACEHOLDER_AVATAR,
        }
    }
}

/// A reference to an externally hosted image, stored as an opaque string
/// (typically a URL). No format validation is imposed — a broken
/// reference simply fails at load time and falls back to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    /// Create a media reference.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the reference string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve this reference for display: the reference itself, or the
    /// placeholder for `kind` if the rendering collaborator has reported
    /// the load as failed.
    pub fn resolve(&self, kind: MediaKind, failed: bool) -> &str {
        if failed {
            kind.placeholder()
        } else {
            self.as_str()
        }
    }
}

impl From<&str> for MediaRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for MediaRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
