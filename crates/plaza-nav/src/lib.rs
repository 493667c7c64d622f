//! # plaza-nav — Client-Side Navigation Stack
//!
//! A hand-rolled navigation history for the showcase session:
//!
//! - **States** ([`state`]): the logical views (`Home`, profiles,
//!   project/user detail), the screen each renders, and the exact
//!   location-string mapping (`/`, `/profile`, `/user/{id}`,
//!   `/project/{id}`).
//!
//! - **Stack** ([`stack`]): the never-empty LIFO of visited views. Push
//!   mirrors a location into the history sink; the back signal pops,
//!   except at the root `Home`, where it is a no-op.
//!
//! - **History** ([`history`]): the [`HistorySink`] seam standing in for
//!   the browser's `history.pushState`.
//!
//! View states are complete values — a project-detail push carries no
//! user selection and vice versa, so the two selections structurally
//! clear each other.

pub mod history;
pub mod stack;
pub mod state;

// Re-export primary types.
pub use history::{HistorySink, NullHistory, RecordedHistory};
pub use stack::NavStack;
pub use state::{Area, ProfileScope, Screen, ViewState};
