use iso8601_timestamp::Timestamp;
use lantern_database::SeenRecord;
use lantern_models::v0::{Item, SeenPolicy, SeenState, SeenView};

/// Classify an item against its seen record.
///
/// This is the whole decision: everything else in this crate is
/// plumbing between the store and this function. No I/O happens here,
/// so every edge case is checkable with plain values.
pub fn classify(item: &Item, record: Option<&SeenRecord>, policy: SeenPolicy) -> SeenView {
    let Some(record) = record else {
        // Never acknowledged, so there is no reference timestamp to
        // jump from and no count to diff against
        return SeenView {
            state: SeenState::UnseenUnknown,
            hide: false,
            delta: None,
            jump_from: None,
        };
    };

    let delta = Some(item.count - record.seen_count);

    let changed_at = Timestamp::parse(&item.changed_at);
    if changed_at.is_none() {
        warn!(
            "Malformed changed_at {:?} on {} {}",
            item.changed_at, item.model, item.id
        );
    }

    match (record.seen_at_timestamp(), changed_at) {
        (Some(seen_at), Some(changed_at)) if seen_at < changed_at => SeenView {
            state: SeenState::UnseenKnown,
            hide: false,
            delta,
            jump_from: Some(seen_at),
        },
        // A missing reference point on either side never marks the item
        // stale on its own
        _ => SeenView {
            state: SeenState::Seen,
            hide: matches!(policy, SeenPolicy::Hide),
            delta,
            jump_from: None,
        },
    }
}
