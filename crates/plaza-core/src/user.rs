//! User accounts. A session has exactly one viewer; other users only
//! appear as navigation targets (user-detail views) and as builders on
//! project records.

use serde::{Deserialize, Serialize};

use crate::identity::UserId;
use crate::media::MediaRef;

/// A user account known to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Avatar image reference.
    pub avatar: MediaRef,
    /// Whether the account is signed in.
    pub is_logged_in: bool,
}

impl User {
    /// The demo viewer account used when no account system is wired up.
    pub fn demo_viewer() -> Self {
        Self {
            id: UserId::new("user123").expect("demo viewer id is non-empty"),
            name: "Alex Rivera".to_string(),
            avatar: MediaRef::new("https://images.example/avatars/alex.png"),
            is_logged_in: true,
        }
    }
}
