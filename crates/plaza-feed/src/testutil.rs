//! Shared test fixtures: hand-built project records and proptest
//! strategies for catalog slices.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use plaza_core::identity::ProjectId;
use plaza_core::media::MediaRef;
use plaza_core::project::{Builder, Project, ProjectMetrics};

/// Build a project with explicit tags, `[upvotes, comments, shares,
/// visits]`, and a creation date.
pub(crate) fn project_with(
    id: &str,
    tags: &[&str],
    metrics: [u64; 4],
    date: (i32, u32, u32),
) -> Project {
    let [upvotes, comments, shares, visits] = metrics;
    Project {
        id: ProjectId::new(id).unwrap(),
        title: format!("Project {id}"),
        description: "Fixture record.".to_string(),
        thumbnail: MediaRef::new("https://images.example/thumb.png"),
        builder: Builder {
            name: "Fixture Builder".to_string(),
            avatar: MediaRef::new("https://images.example/avatar.png"),
        },
        metrics: ProjectMetrics {
            upvotes,
            comments,
            shares,
            visits,
        },
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: Utc
            .with_ymd_and_hms(date.0, date.1, date.2, 12, 0, 0)
            .unwrap(),
    }
}

/// Projects `p0, p1, …` with the given visit counts and unique dates.
pub(crate) fn projects_with_visits(visits: &[u64]) -> Vec<Project> {
    visits
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            project_with(
                &format!("p{i}"),
                &[],
                [0, 0, 0, v],
                (2026, 1, (i % 28) as u32 + 1),
            )
        })
        .collect()
}

/// Strategy: a list of projects with small metric ranges (to force sort
/// ties) and tags drawn from a fixed category pool.
pub(crate) fn arb_projects(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Project>> {
    let tag_pool = prop::sample::subsequence(
        vec!["Design", "AI", "Games", "Productivity", "Music"],
        0..=3,
    );
    let record = (
        prop::array::uniform4(0u64..5),
        tag_pool,
        (2025i32..2027, 1u32..13, 1u32..29),
    );
    prop::collection::vec(record, len).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(i, (metrics, tags, date))| project_with(&format!("p{i}"), &tags, metrics, date))
            .collect()
    })
}
