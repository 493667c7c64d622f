//! # plaza-cli — Terminal Driver for the Plaza Session Engine
//!
//! Provides the `plaza` command-line interface: a headless stand-in for
//! the browser front end that exercises the same session engine.
//!
//! ## Subcommands
//!
//! - `plaza feed` — Render the showcase feed as text cards, simulating
//!   scroll-driven page loads.
//! - `plaza browse` — Walk a scripted navigation sequence and print the
//!   location, screen, and previous-area after each step.
//! - `plaza catalog` — Validate and summarize a catalog file.

pub mod browse;
pub mod catalog;
pub mod feed;

use std::path::Path;

use anyhow::{Context, Result};

use plaza_core::catalog::Catalog;
use plaza_core::demo::demo_catalog;

/// Load a catalog: a JSON or YAML file (by extension) when a path is
/// given, otherwise the built-in demo catalog.
///
/// Malformed *content* stays fail-soft (it degrades to the empty
/// catalog with a logged diagnostic); an unreadable *file* is a real
/// error — there is nothing to degrade to.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(demo_catalog());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog file {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        match serde_yaml::from_str::<serde_json::Value>(&raw) {
            Ok(value) => Ok(Catalog::from_json_value(value)),
            Err(err) => {
                tracing::error!(%err, "catalog source is not valid YAML; degrading to empty catalog");
                Ok(Catalog::empty())
            }
        }
    } else {
        Ok(Catalog::from_json_str(&raw))
    }
}

/// Format a creation timestamp the way feed cards show it, e.g.
/// `Jan 5, 2026`.
pub fn format_card_date(date: &chrono::DateTime<chrono::Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Write;

    fn record_json(id: &str) -> String {
        format!(
            r#"{{
                "id": "{id}",
                "title": "Project {id}",
                "description": "d",
                "thumbnail": "t",
                "builder": {{ "name": "n", "avatar": "a" }},
                "metrics": {{ "upvotes": 1, "comments": 2, "shares": 3, "visits": 4 }},
                "tags": ["Design"],
                "createdAt": "2026-01-05T12:00:00Z"
            }}"#
        )
    }

    #[test]
    fn no_path_loads_demo_catalog() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn loads_json_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "[{}]", record_json("p1")).unwrap();

        let catalog = load_catalog(Some(path.as_path())).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn loads_yaml_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.yaml");
        let yaml = r#"
- id: p1
  title: Project p1
  description: d
  thumbnail: t
  builder:
    name: n
    avatar: a
  metrics:
    upvotes: 1
    comments: 2
    shares: 3
    visits: 4
  tags: [Design]
  createdAt: "2026-01-05T12:00:00Z"
"#;
        std::fs::write(&path, yaml).unwrap();

        let catalog = load_catalog(Some(path.as_path())).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn non_list_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, "{\"projects\": []}").unwrap();

        let catalog = load_catalog(Some(path.as_path())).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_file_is_a_real_error() {
        let result = load_catalog(Some(Path::new("/nonexistent/projects.json")));
        assert!(result.is_err());
    }

    #[test]
    fn card_date_format() {
        let date = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(format_card_date(&date), "Jan 5, 2026");
    }
}
