//! Built-in demo catalog, used by the CLI when no catalog file is given
//! and by scenario tests that want realistic-looking records.

use chrono::{TimeZone, Utc};

use crate::catalog::Catalog;
use crate::identity::ProjectId;
use crate::media::MediaRef;
use crate::project::{Builder, Project, ProjectMetrics};

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    description: &str,
    builder: &str,
    tags: &[&str],
    metrics: [u64; 4],
    date: (i32, u32, u32),
) -> Project {
    let [upvotes, comments, shares, visits] = metrics;
    let slug = id.to_string();
    Project {
        id: ProjectId::new(id).expect("demo ids are non-empty"),
        title: title.to_string(),
        description: description.to_string(),
        thumbnail: MediaRef::new(format!("https://images.plaza.example/thumbs/{slug}.png")),
        builder: Builder {
            name: builder.to_string(),
            avatar: MediaRef::new(format!(
                "https://images.plaza.example/avatars/{}.png",
                builder.to_ascii_lowercase().replace(' ', "-")
            )),
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
            .single()
            .expect("demo timestamps are valid"),
    }
}

/// A twelve-project demo catalog spanning the common filter categories.
pub fn demo_catalog() -> Catalog {
    Catalog::new(vec![
        project(
            "p1",
            "Gradient Garden",
            "A generative plant sketchbook that grows palettes from seed words.",
            "Mara Lin",
            &["Design", "Generative Art"],
            [412, 38, 12, 1945],
            (2026, 1, 5),
        ),
        project(
            "p2",
            "Synth Study",
            "Browser synthesizer experiments with patchable oscillators.",
            "Devon Okafor",
            &["Music", "Audio"],
            [87, 9, 3, 510],
            (2026, 2, 11),
        ),
        project(
            "p3",
            "Ledger Lens",
            "Visualize any CSV of transactions as an explorable sankey.",
            "Priya Nair",
            &["Productivity", "Data"],
            [233, 41, 19, 2870],
            (2026, 1, 28),
        ),
        project(
            "p4",
            "Pocket Dungeon",
            "A one-thumb roguelike with daily seeded runs.",
            "Jonas Weber",
            &["Games"],
            [529, 102, 44, 6120],
            (2025, 12, 19),
        ),
        project(
            "p5",
            "Recipe Radar",
            "Point it at your pantry photo and get three dinner plans.",
            "Sofia Reyes",
            &["AI", "Food"],
            [164, 27, 8, 1333],
            (2026, 3, 2),
        ),
        project(
            "p6",
            "Type Tide",
            "Variable-font playground with exportable CSS keyframes.",
            "Mara Lin",
            &["Design", "Typography"],
            [391, 22, 15, 2204],
            (2026, 2, 23),
        ),
        project(
            "p7",
            "Trail Crumbs",
            "Offline-first hiking journal that stitches GPX into stories.",
            "Ibrahim Khan",
            &["Travel", "Maps"],
            [76, 12, 5, 640],
            (2026, 3, 9),
        ),
        project(
            "p8",
            "Focus Fence",
            "A site blocker that trades minutes of focus for minutes of feed.",
            "Priya Nair",
            &["Productivity"],
            [448, 64, 31, 4102],
            (2026, 1, 14),
        ),
        project(
            "p9",
            "Shader Postcards",
            "Tiny GLSL scenes you can mail as animated postcards.",
            "Yuki Tanaka",
            &["Design", "Generative Art", "Graphics"],
            [305, 18, 22, 1750],
            (2026, 2, 4),
        ),
        project(
            "p10",
            "Deck Docent",
            "Turns a slide deck into a self-guided narrated tour.",
            "Devon Okafor",
            &["AI", "Education"],
            [142, 31, 9, 980],
            (2026, 3, 15),
        ),
        project(
            "p11",
            "Bug Bounty Board",
            "A public scoreboard for your project's open issues.",
            "Jonas Weber",
            &["Developer Tools"],
            [198, 45, 13, 1511],
            (2026, 1, 21),
        ),
        project(
            "p12",
            "Morning Pages",
            "Distraction-free journaling with streaks and gentle prompts.",
            "Sofia Reyes",
            &["Productivity", "Writing"],
            [261, 29, 11, 2045],
            (2026, 2, 17),
        ),
    ])
}
