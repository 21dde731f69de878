use std::collections::HashMap;

use iso8601_timestamp::Timestamp;
use lantern_database::{
    timestamp_to_millis, Database, DatabaseInfo, SeenCompositeKey, SeenRecord, UnavailableDb,
};
use lantern_models::v0::{Item, SeenPolicy, SeenState};

use crate::{classify, SeenTracker};

fn item(id: &str, model: &str, changed_at: &str, count: i64) -> Item {
    Item {
        id: id.to_string(),
        model: model.to_string(),
        changed_at: changed_at.to_string(),
        count,
    }
}

fn record(model: &str, item_id: &str, seen_at: &str, seen_count: i64) -> SeenRecord {
    SeenRecord {
        id: SeenCompositeKey {
            model: model.to_string(),
            item: item_id.to_string(),
        },
        seen_at: timestamp_to_millis(Timestamp::parse(seen_at).unwrap()),
        seen_count,
    }
}

async fn reference_db() -> Database {
    DatabaseInfo::Reference
        .connect()
        .await
        .expect("Database connection failed.")
}

fn policies() -> HashMap<String, SeenPolicy> {
    HashMap::from([
        ("topic".to_string(), SeenPolicy::Deemphasize),
        ("attachment".to_string(), SeenPolicy::Hide),
    ])
}

#[test]
fn never_acknowledged_is_unseen_unknown() {
    let view = classify(
        &item("42", "topic", "2024-01-01T00:00:00Z", 5),
        None,
        SeenPolicy::Deemphasize,
    );

    assert_eq!(view.state, SeenState::UnseenUnknown);
    assert!(!view.hide);
    assert_eq!(view.delta, None);
    assert_eq!(view.jump_from, None);
    assert_eq!(view.badge(), None);
}

#[test]
fn current_record_is_seen() {
    let record = record("topic", "42", "2024-01-02T00:00:00Z", 5);
    let view = classify(
        &item("42", "topic", "2024-01-01T00:00:00Z", 5),
        Some(&record),
        SeenPolicy::Deemphasize,
    );

    assert_eq!(view.state, SeenState::Seen);
    assert!(!view.hide);
    assert_eq!(view.delta, Some(0));
    assert_eq!(view.jump_from, None);
    assert_eq!(view.badge(), None);
}

#[test]
fn hide_policy_hides_seen_items_only() {
    let record = record("attachment", "7", "2024-01-02T00:00:00Z", 0);

    let seen = classify(
        &item("7", "attachment", "2024-01-01T00:00:00Z", 0),
        Some(&record),
        SeenPolicy::Hide,
    );
    assert_eq!(seen.state, SeenState::Seen);
    assert!(seen.hide);

    let stale = classify(
        &item("7", "attachment", "2024-01-03T00:00:00Z", 0),
        Some(&record),
        SeenPolicy::Hide,
    );
    assert_eq!(stale.state, SeenState::UnseenKnown);
    assert!(!stale.hide);
}

#[test]
fn stale_record_is_unseen_known_with_jump_link() {
    let record = record("topic", "42", "2024-01-01T00:00:00Z", 5);
    let view = classify(
        &item("42", "topic", "2024-01-02T00:00:00Z", 8),
        Some(&record),
        SeenPolicy::Deemphasize,
    );

    assert_eq!(view.state, SeenState::UnseenKnown);
    assert_eq!(view.delta, Some(3));
    assert_eq!(view.jump_from, Timestamp::parse("2024-01-01T00:00:00Z"));
    assert_eq!(view.badge(), Some(3));
}

#[test]
fn malformed_changed_at_is_not_stale() {
    let record = record("topic", "42", "2024-01-01T00:00:00Z", 5);
    let view = classify(
        &item("42", "topic", "yesterday-ish", 8),
        Some(&record),
        SeenPolicy::Deemphasize,
    );

    // No reference point: not stale for that reason alone, no jump-link
    assert_eq!(view.state, SeenState::Seen);
    assert_eq!(view.jump_from, None);
    assert_eq!(view.delta, Some(3));
}

#[test]
fn out_of_range_seen_at_is_not_stale() {
    let record = SeenRecord {
        id: SeenCompositeKey {
            model: "topic".to_string(),
            item: "42".to_string(),
        },
        seen_at: i64::MAX,
        seen_count: 5,
    };

    let view = classify(
        &item("42", "topic", "2024-01-02T00:00:00Z", 8),
        Some(&record),
        SeenPolicy::Deemphasize,
    );

    // Unrepresentable acknowledgment time: no reference point, so the
    // item is not stale and there is nothing to jump from
    assert_eq!(view.state, SeenState::Seen);
    assert_eq!(view.jump_from, None);
    assert_eq!(view.delta, Some(3));
}

#[test]
fn badge_suppressed_without_new_sub_items() {
    let record = record("topic", "42", "2024-01-01T00:00:00Z", 5);

    // Count went nowhere
    let view = classify(
        &item("42", "topic", "2024-01-02T00:00:00Z", 5),
        Some(&record),
        SeenPolicy::Deemphasize,
    );
    assert_eq!(view.delta, Some(0));
    assert_eq!(view.badge(), None);

    // Zero count never shows a badge
    let empty = record.clone();
    let view = classify(
        &item("42", "topic", "2024-01-02T00:00:00Z", 0),
        Some(&empty),
        SeenPolicy::Deemphasize,
    );
    assert_eq!(view.badge(), None);
}

#[async_std::test]
async fn acknowledge_then_evaluate() {
    let db = reference_db().await;
    let tracker = SeenTracker::new(db.clone(), policies());

    let rendered = item("42", "topic", "2024-01-01T00:00:00Z", 5);

    let view = tracker.evaluate(&rendered).await;
    assert_eq!(view.state, SeenState::UnseenUnknown);
    assert_eq!(view.delta, None);
    assert_eq!(view.jump_from, None);

    tracker.acknowledge(&rendered).await;

    let view = tracker.evaluate(&rendered).await;
    assert_eq!(view.state, SeenState::Seen);
    assert!(view.delta.unwrap() <= 0);

    // The counter delta is independent of the new/old decision
    let bumped = item("42", "topic", "2024-01-02T00:00:00Z", 8);
    let view = tracker.evaluate(&bumped).await;
    assert_eq!(view.delta, Some(3));
    assert_eq!(view.badge(), Some(3));
}

#[async_std::test]
async fn content_change_after_acknowledgment_goes_stale() {
    let db = reference_db().await;
    let tracker = SeenTracker::new(db.clone(), policies());

    // Acknowledged at a known point in the past
    db.acknowledge_item(
        "topic",
        "42",
        timestamp_to_millis(Timestamp::parse("2024-01-01T00:00:00Z").unwrap()),
        5,
    )
    .await
    .unwrap();

    let view = tracker
        .evaluate(&item("42", "topic", "2024-01-02T00:00:00Z", 8))
        .await;

    assert_eq!(view.state, SeenState::UnseenKnown);
    assert_eq!(view.delta, Some(3));
    assert_eq!(view.jump_from, Timestamp::parse("2024-01-01T00:00:00Z"));
}

#[async_std::test]
async fn acknowledge_is_idempotent() {
    let db = reference_db().await;
    let tracker = SeenTracker::new(db.clone(), policies());

    let rendered = item("42", "topic", "2024-01-01T00:00:00Z", 5);

    tracker.acknowledge(&rendered).await;
    let first = tracker.evaluate(&rendered).await;

    tracker.acknowledge(&rendered).await;
    let second = tracker.evaluate(&rendered).await;

    assert_eq!(first.state, second.state);
    assert_eq!(first.delta, second.delta);
}

#[async_std::test]
async fn acknowledge_all_covers_every_item_of_the_model() {
    let db = reference_db().await;
    let tracker = SeenTracker::new(db.clone(), policies());

    let items = vec![
        item("1", "topic", "2024-01-01T00:00:00Z", 3),
        item("2", "topic", "2024-01-01T00:00:00Z", 0),
        // Wrong model, must be skipped
        item("3", "comment", "2024-01-01T00:00:00Z", 1),
    ];

    tracker.acknowledge_all("topic", &items).await;

    for rendered in &items[..2] {
        let view = tracker.evaluate(rendered).await;
        assert_eq!(view.state, SeenState::Seen);
    }

    let view = tracker.evaluate(&items[2]).await;
    assert_eq!(view.state, SeenState::UnseenUnknown);
}

#[async_std::test]
async fn evaluate_all_matches_individual_evaluation() {
    let db = reference_db().await;
    let tracker = SeenTracker::new(db.clone(), policies());

    db.acknowledge_item(
        "topic",
        "1",
        timestamp_to_millis(Timestamp::parse("2024-01-01T00:00:00Z").unwrap()),
        2,
    )
    .await
    .unwrap();

    let items = vec![
        item("1", "topic", "2024-01-02T00:00:00Z", 6),
        item("2", "topic", "2024-01-01T00:00:00Z", 4),
        item("1", "comment", "2024-01-01T00:00:00Z", 0),
    ];

    let views = tracker.evaluate_all("topic", &items).await;
    assert_eq!(views.len(), items.len());

    for (rendered, view) in items.iter().zip(&views) {
        let individual = tracker.evaluate(rendered).await;
        assert_eq!(view, &individual);
    }

    assert_eq!(views[0].state, SeenState::UnseenKnown);
    assert_eq!(views[0].delta, Some(4));
    assert_eq!(views[1].state, SeenState::UnseenUnknown);
    assert_eq!(views[2].state, SeenState::UnseenUnknown);
}

#[async_std::test]
async fn unavailable_store_degrades_to_never_seen() {
    let tracker = SeenTracker::new(Database::Unavailable(UnavailableDb), policies());

    let rendered = item("42", "topic", "2024-01-01T00:00:00Z", 5);

    // Writes are dropped without surfacing a failure
    tracker.acknowledge(&rendered).await;
    tracker
        .acknowledge_all("topic", &[rendered.clone()])
        .await;

    // Reads fail open: everything shows as new
    let view = tracker.evaluate(&rendered).await;
    assert_eq!(view.state, SeenState::UnseenUnknown);
    assert_eq!(view.delta, None);
    assert_eq!(view.jump_from, None);

    let views = tracker.evaluate_all("topic", &[rendered]).await;
    assert_eq!(views[0].state, SeenState::UnseenUnknown);
}

#[async_std::test]
async fn policies_load_from_config() {
    let db = reference_db().await;
    let tracker = SeenTracker::from_config(db.clone())
        .await
        .expect("valid policy map");

    let rendered = item("7", "attachment", "2024-01-01T00:00:00Z", 0);
    tracker.acknowledge(&rendered).await;

    let view = tracker.evaluate(&rendered).await;
    assert_eq!(view.state, SeenState::Seen);
    assert!(view.hide);
}
