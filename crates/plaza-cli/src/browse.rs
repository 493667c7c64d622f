//! # Browse Subcommand
//!
//! Walks a scripted navigation sequence against a live session and
//! prints the externally observable state after each step — the same
//! location strings the browser address bar would show.
//!
//! Step grammar (comma-separated): `home`, `profile`, `user:{id}`,
//! `project:{id}`, `back`.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use plaza_core::identity::{ProjectId, UserId};
use plaza_core::user::User;
use plaza_feed::query::FeedQuery;
use plaza_nav::state::{ProfileScope, Screen};
use plaza_session::event::SessionEvent;
use plaza_session::session::Session;

use crate::load_catalog;

/// Arguments for the `plaza browse` subcommand.
#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Catalog file (JSON or YAML). Uses the built-in demo catalog when
    /// omitted.
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Comma-separated navigation steps, e.g.
    /// `user:u1,project:p7,back,back`.
    #[arg(long)]
    pub steps: String,
}

/// One parsed navigation step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Navigate to the feed.
    Home,
    /// Open the viewer's own profile.
    OwnProfile,
    /// Open another user's profile.
    User(UserId),
    /// Open a project's detail.
    Project(ProjectId),
    /// The browser back signal.
    Back,
}

/// Parse a comma-separated step script.
pub fn parse_steps(script: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for raw in script.split(',') {
        let raw = raw.trim();
        let step = match raw {
            "home" => Step::Home,
            "profile" => Step::OwnProfile,
            "back" => Step::Back,
            _ => {
                if let Some(id) = raw.strip_prefix("user:") {
                    Step::User(UserId::new(id)?)
                } else if let Some(id) = raw.strip_prefix("project:") {
                    Step::Project(ProjectId::new(id)?)
                } else {
                    bail!(
                        "unknown step {raw:?} (expected home, profile, user:ID, project:ID, or back)"
                    );
                }
            }
        };
        steps.push(step);
    }
    Ok(steps)
}

/// Execute the browse subcommand.
pub fn run_browse(args: &BrowseArgs) -> Result<u8> {
    let catalog = load_catalog(args.data.as_deref())?;
    let steps = parse_steps(&args.steps)?;
    let mut session = Session::new(catalog, User::demo_viewer(), FeedQuery::default());
    session.handle(SessionEvent::LoadCompleted)?;

    println!("{:<24} {:<20} {:<24} prev", "step", "location", "screen");
    print_row(&session, "(start)");
    for step in steps {
        let label = step_label(&step);
        let event = match step {
            Step::Home => SessionEvent::GoHome,
            Step::OwnProfile => SessionEvent::GoToProfile(None),
            Step::User(user) => SessionEvent::GoToProfile(Some(user)),
            Step::Project(project) => SessionEvent::GoToProject(project),
            Step::Back => SessionEvent::Back,
        };
        session.handle(event)?;
        print_row(&session, &label);
    }
    Ok(0)
}

fn step_label(step: &Step) -> String {
    match step {
        Step::Home => "home".to_string(),
        Step::OwnProfile => "profile".to_string(),
        Step::User(user) => format!("user:{user}"),
        Step::Project(project) => format!("project:{project}"),
        Step::Back => "back".to_string(),
    }
}

fn screen_label(screen: &Screen) -> String {
    match screen {
        Screen::Feed => "feed".to_string(),
        Screen::Profile(ProfileScope::Own) => "profile (own)".to_string(),
        Screen::Profile(ProfileScope::User(user)) => format!("profile (user {user})"),
        Screen::Profile(ProfileScope::Project(project)) => {
            format!("profile (project {project})")
        }
    }
}

fn print_row(session: &Session, step: &str) {
    println!(
        "{:<24} {:<20} {:<24} {}",
        step,
        session.location(),
        screen_label(&session.screen()),
        session.previous_area()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_full_grammar() {
        let steps = parse_steps("home, profile, user:u1, project:p7, back").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Home,
                Step::OwnProfile,
                Step::User(UserId::new("u1").unwrap()),
                Step::Project(ProjectId::new("p7").unwrap()),
                Step::Back,
            ]
        );
    }

    #[test]
    fn rejects_unknown_steps() {
        assert!(parse_steps("home,teleport").is_err());
    }

    #[test]
    fn rejects_empty_ids() {
        assert!(parse_steps("user:").is_err());
        assert!(parse_steps("project:  ").is_err());
    }

    #[test]
    fn run_browse_walks_demo_catalog() {
        let args = BrowseArgs {
            data: None,
            steps: "user:u1,project:p7,back,back".to_string(),
        };
        assert_eq!(run_browse(&args).unwrap(), 0);
    }
}
