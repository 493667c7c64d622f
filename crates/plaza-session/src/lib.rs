//! # plaza-session — The Showcase Session Controller
//!
//! Ties the feed pipeline and the navigation stack together under one
//! explicit application-state owner:
//!
//! - **Events** ([`event`]): the discrete input signals — filter and
//!   sort selections, the scroll-visibility advance signal, load
//!   completion, navigation clicks, the browser back signal, upvote
//!   toggles, and image-load failures.
//!
//! - **Session** ([`session`]): dispatches every event, owns the single
//!   pending page load, and exposes the read side rendering
//!   collaborators consume.
//!
//! - **Votes** ([`votes`]): the local-only optimistic upvote ledger.
//!
//! All state is transient and scoped to one session; nothing is
//! persisted or synchronized.

pub mod error;
pub mod event;
pub mod session;
pub mod votes;

// Re-export primary types.
pub use error::SessionError;
pub use event::SessionEvent;
pub use session::Session;
pub use votes::VoteLedger;
