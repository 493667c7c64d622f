//! # Session Events
//!
//! Every state transition in the session happens on one of these
//! discrete events, delivered by a rendering collaborator or the browser
//! environment. There is no ambient observer registration — the
//! scroll-visibility trigger is just [`SessionEvent::LastCardVisible`].

use plaza_core::identity::{ProjectId, UserId};
use plaza_core::media::MediaKind;
use plaza_feed::query::{CategoryFilter, SortKey};

/// An input signal to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The viewer picked a category in the filter bar.
    CategorySelected(CategoryFilter),
    /// The viewer picked a sort key in the filter bar.
    SortSelected(SortKey),
    /// The last rendered card entered the viewport (the advance signal).
    LastCardVisible,
    /// The in-flight page load resolved.
    LoadCompleted,
    /// The viewer clicked through to the feed.
    GoHome,
    /// The viewer opened a profile; `None` targets the viewer's own.
    GoToProfile(Option<UserId>),
    /// The viewer opened a project's detail.
    GoToProject(ProjectId),
    /// The browser back signal.
    Back,
    /// The viewer toggled their upvote on a project.
    UpvoteToggled(ProjectId),
    /// A rendering collaborator failed to load an image.
    MediaFailed(ProjectId, MediaKind),
}
