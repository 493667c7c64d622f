//! # Navigation Stack
//!
//! The LIFO sequence of visited view states. Never empty — the initial
//! [`ViewState::Home`] is the root and cannot be popped. The top of the
//! stack is the currently rendered view.

use crate::history::HistorySink;
use crate::state::{Area, ViewState};

/// The ordered history of logical views visited this session.
#[derive(Debug, Clone, PartialEq)]
pub struct NavStack {
    entries: Vec<ViewState>,
    previous_area: Area,
}

impl NavStack {
    /// A stack holding the initial `Home` state.
    pub fn new() -> Self {
        Self {
            entries: vec![ViewState::Home],
            previous_area: Area::Home,
        }
    }

    /// The currently rendered view: the top of the stack.
    pub fn current(&self) -> &ViewState {
        self.entries
            .last()
            .expect("navigation stack is never empty")
    }

    /// Number of entries, root included. Always at least 1.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// The logical area the viewer was in immediately before the most
    /// recent push. Drives the profile screen's back affordance, which
    /// is distinct from stack-pop semantics.
    pub fn previous_area(&self) -> Area {
        self.previous_area
    }

    /// Push a view: record the outgoing area, append `state`, and mirror
    /// its location into `history`. The new top is the rendered view.
    pub fn push(&mut self, state: ViewState, history: &mut dyn HistorySink) {
        self.previous_area = self.current().area();
        let location = state.location();
        tracing::debug!(%location, depth = self.entries.len() + 1, "navigation push");
        self.entries.push(state);
        history.push_location(&location);
    }

    /// Handle the browser back signal: remove the top entry and render
    /// the new top. At the root this is a no-op — the initial `Home`
    /// cannot be popped. Returns whether an entry was removed.
    pub fn pop(&mut self) -> bool {
        if self.entries.len() <= 1 {
            tracing::debug!("back at root; ignoring");
            return false;
        }
        self.entries.pop();
        tracing::debug!(
            location = %self.current().location(),
            depth = self.entries.len(),
            "navigation pop"
        );
        true
    }
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::history::NullHistory;
    use plaza_core::identity::{ProjectId, UserId};

    fn arb_view_state() -> impl Strategy<Value = ViewState> {
        prop_oneof![
            Just(ViewState::Home),
            Just(ViewState::Profile { user: None }),
            "[a-z][a-z0-9]{0,8}".prop_map(|s| ViewState::Profile {
                user: Some(UserId::new(s).unwrap()),
            }),
            "[a-z][a-z0-9]{0,8}".prop_map(|s| ViewState::UserDetail {
                user: UserId::new(s).unwrap(),
            }),
            "[a-z][a-z0-9]{0,8}".prop_map(|s| ViewState::ProjectDetail {
                project: ProjectId::new(s).unwrap(),
            }),
        ]
    }

    proptest! {
        /// Any sequence of pushes followed by the same number of pops
        /// restores the state before the pushes.
        #[test]
        fn pushes_then_pops_are_inverses(
            prefix in prop::collection::vec(arb_view_state(), 0..5),
            pushes in prop::collection::vec(arb_view_state(), 1..10),
        ) {
            let mut history = NullHistory;
            let mut stack = NavStack::new();
            for state in prefix {
                stack.push(state, &mut history);
            }
            let before = stack.current().clone();
            let depth_before = stack.depth();

            for state in &pushes {
                stack.push(state.clone(), &mut history);
            }
            for _ in 0..pushes.len() {
                prop_assert!(stack.pop());
            }

            prop_assert_eq!(stack.current(), &before);
            prop_assert_eq!(stack.depth(), depth_before);
        }

        /// Pop never underflows past the root.
        #[test]
        fn pop_never_empties_the_stack(extra_pops in 1usize..20) {
            let mut stack = NavStack::new();
            for _ in 0..extra_pops {
                stack.pop();
            }
            prop_assert_eq!(stack.depth(), 1);
            prop_assert_eq!(stack.current(), &ViewState::Home);
        }
    }
}
