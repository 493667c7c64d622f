//! # plaza-core — Foundational Types for Plaza
//!
//! Domain primitives shared by every Plaza crate:
//!
//! - **Identity** ([`identity`]): validated string newtypes for project
//!   and user identifiers.
//!
//! - **Projects** ([`project`]): the showcased project record, its
//!   builder, and engagement metrics (upvotes, comments, shares, visits).
//!
//! - **Media** ([`media`]): opaque image references with fixed
//!   placeholder fallback for failed loads.
//!
//! - **Catalog** ([`catalog`]): the read-only project collection, loaded
//!   once per session with fail-soft handling of malformed sources — a
//!   non-list catalog degrades to empty with a logged diagnostic instead
//!   of an error reaching the rendering layer.
//!
//! - **Users** ([`user`]): the viewer account and navigation targets.
//!
//! - **Demo data** ([`demo`]): a built-in twelve-project catalog for the
//!   CLI and scenario tests.

pub mod catalog;
pub mod demo;
pub mod error;
pub mod identity;
pub mod media;
pub mod project;
pub mod user;

// Re-export primary types.
pub use catalog::{Catalog, ALL_CATEGORIES};
pub use demo::demo_catalog;
pub use error::ValidationError;
pub use identity::{ProjectId, UserId};
pub use media::{MediaKind, MediaRef, PLACEHOLDER_AVATAR, PLACEHOLDER_THUMBNAIL};
pub use project::{Builder, Project, ProjectMetrics, TOP_PROJECT_UPVOTES};
pub use user::User;
