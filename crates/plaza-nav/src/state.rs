//! # View States
//!
//! The logical views a session can be in, the screen each one renders,
//! and the location string mirrored into browser history.
//!
//! A view state is complete: a `ProjectDetail` carries no user selection
//! and a `UserDetail` carries no project selection, so selecting either
//! always clears the other. The rendered screen derives solely from the
//! top of the navigation stack.

use serde::{Deserialize, Serialize};

use plaza_core::identity::{ProjectId, UserId};

/// A logical view the session can be navigated to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "view")]
pub enum ViewState {
    /// The showcase feed.
    Home,
    /// The viewer's own profile page. The `user` field can carry another
    /// user's id in deserialized or externally built states and then
    /// renders identically to [`ViewState::UserDetail`], but navigation
    /// always pushes `UserDetail` for other users — that variant is the
    /// canonical form.
    Profile {
        /// The profile's owner; `None` means the viewer.
        user: Option<UserId>,
    },
    /// A project's detail, shown within the profile page.
    ProjectDetail {
        /// The project being shown.
        project: ProjectId,
    },
    /// A user's detail page.
    UserDetail {
        /// The user being shown.
        user: UserId,
    },
}

/// What the profile screen is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileScope {
    /// The viewer's own profile.
    Own,
    /// Another user's profile.
    User(UserId),
    /// A project's detail view.
    Project(ProjectId),
}

/// The screen a rendering collaborator should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The feed screen (hero, filter bar, project grid).
    Feed,
    /// The profile screen, scoped per [`ProfileScope`].
    Profile(ProfileScope),
}

/// The logical area a view belongs to, used for the previous-area side
/// channel (the profile screen's back affordance).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    /// The feed.
    #[default]
    Home,
    /// A profile or user-detail view.
    Profile,
    /// A project-detail view.
    Project,
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Home => "home",
            Self::Profile => "profile",
            Self::Project => "project",
        };
        write!(f, "{s}")
    }
}

impl ViewState {
    /// The screen this state renders.
    pub fn screen(&self) -> Screen {
        match self {
            Self::Home => Screen::Feed,
            Self::Profile { user: None } => Screen::Profile(ProfileScope::Own),
            Self::Profile { user: Some(user) } => {
                Screen::Profile(ProfileScope::User(user.clone()))
            }
            Self::ProjectDetail { project } => {
                Screen::Profile(ProfileScope::Project(project.clone()))
            }
            Self::UserDetail { user } => Screen::Profile(ProfileScope::User(user.clone())),
        }
    }

    /// The location string mirrored into browser history. Exact mapping:
    /// `/`, `/profile`, `/user/{id}`, `/project/{id}`.
    pub fn location(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Profile { user: None } => "/profile".to_string(),
            Self::Profile { user: Some(user) } => format!("/user/{user}"),
            Self::ProjectDetail { project } => format!("/project/{project}"),
            Self::UserDetail { user } => format!("/user/{user}"),
        }
    }

    /// The logical area this state belongs to.
    pub fn area(&self) -> Area {
        match self {
            Self::Home => Area::Home,
            Self::ProjectDetail { .. } => Area::Project,
            Self::Profile { .. } | Self::UserDetail { .. } => Area::Profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn pid(s: &str) -> ProjectId {
        ProjectId::new(s).unwrap()
    }

    #[test]
    fn location_mapping_is_exact() {
        assert_eq!(ViewState::Home.location(), "/");
        assert_eq!(ViewState::Profile { user: None }.location(), "/profile");
        assert_eq!(
            ViewState::Profile {
                user: Some(uid("u1"))
            }
            .location(),
            "/user/u1"
        );
        assert_eq!(
            ViewState::UserDetail { user: uid("u1") }.location(),
            "/user/u1"
        );
        assert_eq!(
            ViewState::ProjectDetail { project: pid("p7") }.location(),
            "/project/p7"
        );
    }

    #[test]
    fn transition_table() {
        assert_eq!(ViewState::Home.screen(), Screen::Feed);
        assert_eq!(
            ViewState::Profile { user: None }.screen(),
            Screen::Profile(ProfileScope::Own)
        );
        assert_eq!(
            ViewState::Profile {
                user: Some(uid("u2"))
            }
            .screen(),
            Screen::Profile(ProfileScope::User(uid("u2")))
        );
        assert_eq!(
            ViewState::ProjectDetail { project: pid("p7") }.screen(),
            Screen::Profile(ProfileScope::Project(pid("p7")))
        );
        assert_eq!(
            ViewState::UserDetail { user: uid("u3") }.screen(),
            Screen::Profile(ProfileScope::User(uid("u3")))
        );
    }

    #[test]
    fn areas() {
        assert_eq!(ViewState::Home.area(), Area::Home);
        assert_eq!(ViewState::Profile { user: None }.area(), Area::Profile);
        assert_eq!(ViewState::UserDetail { user: uid("u1") }.area(), Area::Profile);
        assert_eq!(
            ViewState::ProjectDetail { project: pid("p1") }.area(),
            Area::Project
        );
    }

    #[test]
    fn area_display() {
        assert_eq!(Area::Home.to_string(), "home");
        assert_eq!(Area::Profile.to_string(), "profile");
        assert_eq!(Area::Project.to_string(), "project");
    }

    #[test]
    fn view_state_serde_roundtrip() {
        let state = ViewState::ProjectDetail { project: pid("p7") };
        let json = serde_json::to_string(&state).unwrap();
        let deser: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deser);
    }
}
