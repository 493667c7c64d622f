//! # Catalog Subcommand
//!
//! Validates a catalog file and prints a summary: how many records
//! loaded, the category labels a filter bar would offer, and the span
//! of creation dates.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::{format_card_date, load_catalog};

/// Arguments for the `plaza catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog file (JSON or YAML). Summarizes the built-in demo
    /// catalog when omitted.
    #[arg(long)]
    pub data: Option<PathBuf>,
}

/// Execute the catalog subcommand.
pub fn run_catalog(args: &CatalogArgs) -> Result<u8> {
    let catalog = load_catalog(args.data.as_deref())?;

    println!("projects: {}", catalog.len());
    println!("categories: {}", catalog.categories().join(", "));

    let dates: Vec<_> = catalog.projects().iter().map(|p| p.created_at).collect();
    if let (Some(oldest), Some(newest)) = (dates.iter().min(), dates.iter().max()) {
        println!(
            "created: {} … {}",
            format_card_date(oldest),
            format_card_date(newest)
        );
    }

    // An empty catalog usually means a malformed source was degraded;
    // surface that as a nonzero exit for scripting.
    Ok(if catalog.is_empty() { 1 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_summary_exits_zero() {
        let args = CatalogArgs { data: None };
        assert_eq!(run_catalog(&args).unwrap(), 0);
    }

    #[test]
    fn degraded_catalog_exits_nonzero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "\"not a list\"").unwrap();
        let args = CatalogArgs {
            data: Some(path),
        };
        assert_eq!(run_catalog(&args).unwrap(), 1);
    }
}
