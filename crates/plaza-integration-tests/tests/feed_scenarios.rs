//! End-to-end feed scenarios: a session driven over a catalog loaded
//! from a real file, exercising filtering, sorting, infinite scroll,
//! and the reset protocol together.

use serde_json::{json, Value};

use plaza_cli::load_catalog;
use plaza_core::catalog::Catalog;
use plaza_core::user::User;
use plaza_feed::pipeline::PAGE_SIZE;
use plaza_feed::query::{CategoryFilter, FeedQuery, SortKey};
use plaza_session::event::SessionEvent;
use plaza_session::session::Session;

fn record(id: &str, tags: &[&str], visits: u64, day: u32) -> Value {
    json!({
        "id": id,
        "title": format!("Project {id}"),
        "description": "Scenario record.",
        "thumbnail": format!("https://images.example/{id}.png"),
        "builder": { "name": "Scenario Builder", "avatar": "https://images.example/b.png" },
        "metrics": { "upvotes": visits / 10, "comments": 1, "shares": 1, "visits": visits },
        "tags": tags,
        "createdAt": format!("2026-01-{day:02}T12:00:00Z")
    })
}

fn session_over(records: Vec<Value>, query: FeedQuery) -> Session {
    let catalog = Catalog::from_json_value(Value::Array(records));
    let mut session = Session::new(catalog, User::demo_viewer(), query);
    session.handle(SessionEvent::LoadCompleted).unwrap();
    session
}

fn advance_and_complete(session: &mut Session) {
    session.handle(SessionEvent::LastCardVisible).unwrap();
    session.handle(SessionEvent::LoadCompleted).unwrap();
}

#[test]
fn design_category_fits_on_one_page() {
    // 10 projects, 3 tagged Design, page size 6: the first page shows
    // all 3 and pagination is done.
    let mut records: Vec<Value> = (0..7)
        .map(|i| record(&format!("p{i}"), &["Games"], i as u64, i + 1))
        .collect();
    records.push(record("d1", &["Design"], 100, 20));
    records.push(record("d2", &["Design"], 200, 21));
    records.push(record("d3", &["design"], 300, 22));

    let query = FeedQuery::new(CategoryFilter::from_label("Design"), SortKey::Newest);
    let session = session_over(records, query);

    assert_eq!(session.feed().visible().len(), 3);
    assert!(!session.feed().has_more());
    assert!(session
        .feed()
        .visible()
        .iter()
        .all(|p| p.has_tag("design")));
}

#[test]
fn twenty_projects_paginate_in_three_advances() {
    let records: Vec<Value> = (0..20)
        .map(|i| record(&format!("p{i}"), &[], i as u64, (i % 28) + 1))
        .collect();
    let query = FeedQuery::new(CategoryFilter::Unrestricted, SortKey::MostVisited);
    let mut session = session_over(records, query);

    let visits: Vec<u64> = session
        .feed()
        .visible()
        .iter()
        .map(|p| p.metrics.visits)
        .collect();
    assert_eq!(visits, vec![19, 18, 17, 16, 15, 14]);
    assert!(session.feed().has_more());

    advance_and_complete(&mut session);
    assert_eq!(session.feed().visible().len(), 12);
    assert!(session.feed().has_more());

    advance_and_complete(&mut session);
    advance_and_complete(&mut session);
    assert_eq!(session.feed().visible().len(), 20);
    assert!(!session.feed().has_more());

    // Further advance signals change nothing.
    let before: Vec<_> = session.feed().visible().to_vec();
    session.handle(SessionEvent::LastCardVisible).unwrap();
    assert!(!session.load_pending());
    assert_eq!(session.feed().visible(), before.as_slice());
}

#[test]
fn query_change_mid_scroll_resets_before_recompute() {
    let records: Vec<Value> = (0..20)
        .map(|i| {
            let tag = if i % 2 == 0 { "AI" } else { "Games" };
            record(&format!("p{i}"), &[tag], i as u64, (i % 28) + 1)
        })
        .collect();
    let mut session = session_over(records, FeedQuery::default());
    advance_and_complete(&mut session);
    assert_eq!(session.feed().page(), 2);

    session
        .handle(SessionEvent::CategorySelected(CategoryFilter::from_label(
            "AI",
        )))
        .unwrap();
    // Synchronous reset: no stale-filtered items remain visible.
    assert_eq!(session.feed().page(), 1);
    assert!(session.feed().visible().is_empty());

    session.handle(SessionEvent::LoadCompleted).unwrap();
    assert_eq!(session.feed().visible().len(), PAGE_SIZE);
    assert!(session.feed().visible().iter().all(|p| p.has_tag("AI")));
}

#[test]
fn catalog_file_drives_a_full_session() {
    let records: Vec<Value> = (0..8)
        .map(|i| record(&format!("p{i}"), &["Design"], i as u64, (i % 28) + 1))
        .collect();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    std::fs::write(&path, serde_json::to_string_pretty(&records).unwrap()).unwrap();

    let catalog = load_catalog(Some(path.as_path())).unwrap();
    assert_eq!(catalog.len(), 8);

    let mut session = Session::new(catalog, User::demo_viewer(), FeedQuery::default());
    session.handle(SessionEvent::LoadCompleted).unwrap();
    assert_eq!(session.feed().visible().len(), PAGE_SIZE);

    advance_and_complete(&mut session);
    assert_eq!(session.feed().visible().len(), 8);
    assert!(!session.feed().has_more());
}

#[test]
fn malformed_catalog_file_degrades_to_empty_feed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"oops\": true}").unwrap();

    let catalog = load_catalog(Some(path.as_path())).unwrap();
    let mut session = Session::new(catalog, User::demo_viewer(), FeedQuery::default());
    session.handle(SessionEvent::LoadCompleted).unwrap();

    assert!(session.feed().visible().is_empty());
    assert!(!session.feed().has_more());
}
