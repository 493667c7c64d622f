//! # Session Controller
//!
//! The single owner of all mutable session state: the feed window, the
//! navigation stack, the vote ledger, the failed-media set, and the one
//! pending page load. Child components receive data and return events;
//! there are no ambient globals.
//!
//! Single-threaded and event-driven: every transition happens inside
//! [`Session::handle`] on a discrete [`SessionEvent`]. The only ordering
//! hazard — overlapping page loads — is excluded by the feed's loading
//! guard plus the session's single `pending` slot.

use std::collections::HashSet;

use plaza_core::catalog::Catalog;
use plaza_core::identity::{ProjectId, UserId};
use plaza_core::media::MediaKind;
use plaza_core::project::Project;
use plaza_core::user::User;
use plaza_feed::query::FeedQuery;
use plaza_feed::window::{Feed, PageLoad};
use plaza_nav::history::RecordedHistory;
use plaza_nav::stack::NavStack;
use plaza_nav::state::{Area, Screen, ViewState};

use crate::error::SessionError;
use crate::event::SessionEvent;
use crate::votes::VoteLedger;

/// The top-level application state for one showcase session.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    viewer: User,
    feed: Feed,
    nav: NavStack,
    history: RecordedHistory,
    votes: VoteLedger,
    failed_media: HashSet<(ProjectId, MediaKind)>,
    pending: Option<PageLoad>,
}

impl Session {
    /// Start a session over `catalog` with the page-1 load pending.
    pub fn new(catalog: Catalog, viewer: User, query: FeedQuery) -> Self {
        let (feed, load) = Feed::new(query);
        Self {
            catalog,
            viewer,
            feed,
            nav: NavStack::new(),
            history: RecordedHistory::new(),
            votes: VoteLedger::new(),
            failed_media: HashSet::new(),
            pending: Some(load),
        }
    }

    /// Dispatch one event.
    pub fn handle(&mut self, event: SessionEvent) -> Result<(), SessionError> {
        match event {
            SessionEvent::CategorySelected(category) => {
                let query = self.feed.query().with_category(category);
                if let Some(load) = self.feed.set_query(query) {
                    // Supersedes any load still in flight; the feed drops
                    // the old token as stale if it ever resurfaces.
                    self.pending = Some(load);
                }
            }
            SessionEvent::SortSelected(sort) => {
                let query = self.feed.query().with_sort(sort);
                if let Some(load) = self.feed.set_query(query) {
                    self.pending = Some(load);
                }
            }
            SessionEvent::LastCardVisible => {
                if let Some(load) = self.feed.advance() {
                    debug_assert!(self.pending.is_none());
                    self.pending = Some(load);
                }
            }
            SessionEvent::LoadCompleted => match self.pending.take() {
                Some(load) => self.feed.complete(load, self.catalog.projects()),
                None => tracing::debug!("load completion with no pending load; ignoring"),
            },
            SessionEvent::GoHome => self.push_view(ViewState::Home),
            SessionEvent::GoToProfile(user) => {
                let state = match user {
                    Some(user) => ViewState::UserDetail { user },
                    None => ViewState::Profile { user: None },
                };
                self.push_view(state);
            }
            SessionEvent::GoToProject(project) => {
                if !self.catalog.contains(&project) {
                    return Err(SessionError::UnknownProject { id: project });
                }
                self.push_view(ViewState::ProjectDetail { project });
            }
            SessionEvent::Back => {
                self.nav.pop();
            }
            SessionEvent::UpvoteToggled(project) => {
                if !self.catalog.contains(&project) {
                    return Err(SessionError::UnknownProject { id: project });
                }
                let upvoted = self.votes.toggle(project.clone());
                tracing::debug!(%project, upvoted, "upvote toggled");
            }
            SessionEvent::MediaFailed(project, kind) => {
                self.failed_media.insert((project, kind));
            }
        }
        Ok(())
    }

    /// Apply the pending page load, if any. The driver calls this after
    /// its simulated latency elapses; it is equivalent to handling
    /// [`SessionEvent::LoadCompleted`].
    pub fn complete_pending_load(&mut self) {
        if let Some(load) = self.pending.take() {
            self.feed.complete(load, self.catalog.projects());
        }
    }

    fn push_view(&mut self, state: ViewState) {
        self.nav.push(state, &mut self.history);
    }

    // ── Read side ────────────────────────────────────────────────────

    /// The read-only project catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The viewer account.
    pub fn viewer(&self) -> &User {
        &self.viewer
    }

    /// The feed window (visible slice, loading flag, `has_more`).
    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    /// Whether a page load is pending with the driver.
    pub fn load_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The currently rendered view state.
    pub fn view(&self) -> &ViewState {
        self.nav.current()
    }

    /// The screen a rendering collaborator should draw.
    pub fn screen(&self) -> Screen {
        self.nav.current().screen()
    }

    /// The externally observable location of the current view.
    pub fn location(&self) -> String {
        self.nav.current().location()
    }

    /// The mirrored history record.
    pub fn history(&self) -> &RecordedHistory {
        &self.history
    }

    /// The area the viewer was in before the last navigation push.
    pub fn previous_area(&self) -> Area {
        self.nav.previous_area()
    }

    /// Stack depth, root included.
    pub fn nav_depth(&self) -> usize {
        self.nav.depth()
    }

    /// The upvote count to display for `project`, local toggle applied.
    pub fn effective_upvotes(&self, project: &Project) -> u64 {
        self.votes.effective_upvotes(project)
    }

    /// Whether the viewer has toggled an upvote on `id`.
    pub fn is_upvoted(&self, id: &ProjectId) -> bool {
        self.votes.is_upvoted(id)
    }

    /// The thumbnail to display for `project`: its reference, or the
    /// placeholder if a load failure was reported.
    pub fn thumbnail_for<'a>(&self, project: &'a Project) -> &'a str {
        let failed = self
            .failed_media
            .contains(&(project.id.clone(), MediaKind::Thumbnail));
        project.thumbnail.resolve(MediaKind::Thumbnail, failed)
    }

    /// The builder avatar to display for `project`, placeholder-aware.
    pub fn avatar_for<'a>(&self, project: &'a Project) -> &'a str {
        let failed = self
            .failed_media
            .contains(&(project.id.clone(), MediaKind::Avatar));
        project.builder.avatar.resolve(MediaKind::Avatar, failed)
    }

    /// The user id a profile screen should show for the current view,
    /// defaulting to the viewer for `Home`/own-profile states.
    pub fn profile_user(&self) -> &UserId {
        match self.nav.current() {
            ViewState::Profile { user: Some(user) } | ViewState::UserDetail { user } => user,
            _ => &self.viewer.id,
        }
    }
}
