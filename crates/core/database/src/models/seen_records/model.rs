use iso8601_timestamp::{Duration, Timestamp};

auto_derived!(
    /// Acknowledgment state for one item, as seen by one browsing session
    pub struct SeenRecord {
        /// Composite key pointing to an item within a content model
        #[serde(rename = "_id")]
        pub id: SeenCompositeKey,

        /// Epoch milliseconds of the last time the item was acknowledged
        pub seen_at: i64,
        /// Item count at the time of the last acknowledgment
        pub seen_count: i64,
    }

    /// Composite primary key consisting of content model and item id
    #[derive(Hash)]
    pub struct SeenCompositeKey {
        /// Content model name
        pub model: String,
        /// Item Id
        pub item: String,
    }
);

impl SeenRecord {
    /// Interpret the stored epoch milliseconds as a timestamp.
    ///
    /// Returns None for values outside the representable range, which
    /// callers treat as a missing reference point.
    pub fn seen_at_timestamp(&self) -> Option<Timestamp> {
        Timestamp::UNIX_EPOCH.checked_add(Duration::milliseconds(self.seen_at))
    }
}

/// Convert a timestamp to the epoch-millisecond storage representation
pub fn timestamp_to_millis(timestamp: Timestamp) -> i64 {
    timestamp
        .duration_since(Timestamp::UNIX_EPOCH)
        .whole_milliseconds() as i64
}

#[cfg(test)]
mod tests {
    use iso8601_timestamp::Timestamp;

    use crate::{timestamp_to_millis, SeenCompositeKey, SeenRecord};

    #[async_std::test]
    async fn acknowledge_and_fetch() {
        database_test!(|db| async move {
            db.acknowledge_item("topic", "42", 1000, 5).await.unwrap();

            let record = db
                .fetch_seen_record("topic", "42")
                .await
                .unwrap()
                .expect("record to exist");

            assert_eq!(record.seen_at, 1000);
            assert_eq!(record.seen_count, 5);

            // Same id under another model must not collide
            assert!(db
                .fetch_seen_record("comment", "42")
                .await
                .unwrap()
                .is_none());
        });
    }

    #[async_std::test]
    async fn acknowledge_overwrites() {
        database_test!(|db| async move {
            db.acknowledge_item("topic", "42", 1000, 5).await.unwrap();
            db.acknowledge_item("topic", "42", 2000, 8).await.unwrap();

            let record = db
                .fetch_seen_record("topic", "42")
                .await
                .unwrap()
                .expect("record to exist");

            assert_eq!(record.seen_at, 2000);
            assert_eq!(record.seen_count, 8);
        });
    }

    #[async_std::test]
    async fn acknowledge_many_items() {
        database_test!(|db| async move {
            db.acknowledge_items(
                "topic",
                &[("1".to_string(), 3), ("2".to_string(), 0)],
                5000,
            )
            .await
            .unwrap();

            let records = db
                .fetch_seen_records("topic", &["1".to_string(), "2".to_string()])
                .await
                .unwrap();

            assert_eq!(records.len(), 2);
            assert!(records.iter().all(|record| record.seen_at == 5000));
        });
    }

    #[test]
    fn timestamp_round_trip() {
        let now = Timestamp::now_utc();
        let record = SeenRecord {
            id: SeenCompositeKey {
                model: "topic".to_string(),
                item: "42".to_string(),
            },
            seen_at: timestamp_to_millis(now),
            seen_count: 0,
        };

        let restored = record.seen_at_timestamp().expect("timestamp in range");
        assert_eq!(timestamp_to_millis(restored), record.seen_at);
    }
}
