//! # Feed Subcommand
//!
//! Renders the showcase feed as text cards, driving the session exactly
//! the way the browser does: an initial page-1 load, then one
//! scroll-visibility signal per additional page, each resolving after a
//! simulated latency.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use plaza_core::project::{Project, ProjectMetrics};
use plaza_core::user::User;
use plaza_feed::query::{CategoryFilter, FeedQuery, SortKey};
use plaza_session::event::SessionEvent;
use plaza_session::session::Session;

use crate::{format_card_date, load_catalog};

/// Arguments for the `plaza feed` subcommand.
#[derive(Args, Debug)]
pub struct FeedArgs {
    /// Catalog file (JSON or YAML). Uses the built-in demo catalog when
    /// omitted.
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Category filter. "All" or an empty string means unrestricted.
    #[arg(long, default_value = "All")]
    pub category: String,

    /// Sort key.
    #[arg(long, default_value = "newest")]
    pub sort: SortKey,

    /// Number of pages to load (initial page included).
    #[arg(long, default_value_t = 1)]
    pub pages: u32,

    /// Simulated latency per page load, in milliseconds.
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,
}

/// Execute the feed subcommand.
pub fn run_feed(args: &FeedArgs) -> Result<u8> {
    let catalog = load_catalog(args.data.as_deref())?;
    let query = FeedQuery::new(
        CategoryFilter::from_label(args.category.clone()),
        args.sort,
    );
    tracing::info!(
        projects = catalog.len(),
        category = %query.category,
        sort = %query.sort,
        "rendering feed"
    );

    let mut session = Session::new(catalog, User::demo_viewer(), query);
    let delay = Duration::from_millis(args.delay_ms);
    let mut shown = 0;

    for page in 1..=args.pages.max(1) {
        if page > 1 {
            session.handle(SessionEvent::LastCardVisible)?;
            if !session.load_pending() {
                // Advance was refused: the filtered collection is done.
                break;
            }
        }
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        session.complete_pending_load();

        let visible = session.feed().visible();
        if visible.is_empty() {
            println!("No projects found matching your criteria.");
            break;
        }
        println!("── Page {page} ──");
        for project in &visible[shown..] {
            print_card(&session, project);
        }
        shown = visible.len();
    }

    println!(
        "{} project(s) shown; more available: {}",
        shown,
        if session.feed().has_more() { "yes" } else { "no" }
    );
    Ok(0)
}

fn print_card(session: &Session, project: &Project) {
    let upvotes = session.effective_upvotes(project);
    let badge = if ProjectMetrics::is_top_project(upvotes) {
        "  [Top Project]"
    } else {
        ""
    };
    println!(
        "{}  ({}){badge}",
        project.title,
        format_card_date(&project.created_at)
    );
    println!("  {}", project.description);
    println!("  by {}  <{}>", project.builder.name, session.avatar_for(project));
    if !project.tags.is_empty() {
        println!("  tags: {}", project.tags.join(", "));
    }
    println!(
        "  ▲ {}  comments {}  shares {}  {} views",
        upvotes, project.metrics.comments, project.metrics.shares, project.metrics.visits
    );
}
