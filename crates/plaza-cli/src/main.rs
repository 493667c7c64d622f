//! # plaza CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity flags map onto a tracing
//! env-filter so library diagnostics (catalog degradation, ignored
//! advance signals) are observable from the terminal.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use plaza_cli::browse::{run_browse, BrowseArgs};
use plaza_cli::catalog::{run_catalog, CatalogArgs};
use plaza_cli::feed::{run_feed, FeedArgs};

/// Plaza — community showcase session engine.
///
/// Headless driver for the showcase feed: filtering, sorting, infinite
/// scroll, and the client-side navigation stack, rendered as text.
#[derive(Parser, Debug)]
#[command(name = "plaza", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the showcase feed as text cards.
    Feed(FeedArgs),

    /// Walk a scripted navigation sequence.
    Browse(BrowseArgs),

    /// Validate and summarize a catalog file.
    Catalog(CatalogArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Feed(args) => run_feed(&args),
        Commands::Browse(args) => run_browse(&args),
        Commands::Catalog(args) => run_catalog(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
