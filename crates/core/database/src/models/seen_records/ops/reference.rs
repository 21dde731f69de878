use lantern_result::Result;

use crate::{ReferenceDb, SeenCompositeKey, SeenRecord};

use super::AbstractSeenRecords;

#[async_trait]
impl AbstractSeenRecords for ReferenceDb {
    /// Acknowledge an item.
    async fn acknowledge_item(
        &self,
        model: &str,
        item_id: &str,
        seen_at: i64,
        seen_count: i64,
    ) -> Result<()> {
        let mut seen_records = self.seen_records.lock().await;
        let key = SeenCompositeKey {
            model: model.to_string(),
            item: item_id.to_string(),
        };

        if let Some(record) = seen_records.get_mut(&key) {
            record.seen_at = seen_at;
            record.seen_count = seen_count;
        } else {
            seen_records.insert(
                key.clone(),
                SeenRecord {
                    id: key,
                    seen_at,
                    seen_count,
                },
            );
        }

        Ok(())
    }

    /// Acknowledge many items.
    async fn acknowledge_items(
        &self,
        model: &str,
        items: &[(String, i64)],
        seen_at: i64,
    ) -> Result<()> {
        for (item_id, count) in items {
            self.acknowledge_item(model, item_id, seen_at, *count)
                .await?;
        }

        Ok(())
    }

    /// Fetch the seen record for a specific item.
    async fn fetch_seen_record(&self, model: &str, item_id: &str) -> Result<Option<SeenRecord>> {
        let seen_records = self.seen_records.lock().await;
        let key = SeenCompositeKey {
            model: model.to_string(),
            item: item_id.to_string(),
        };

        Ok(seen_records.get(&key).cloned())
    }

    /// Fetch all seen records for a set of items within one model.
    async fn fetch_seen_records(
        &self,
        model: &str,
        item_ids: &[String],
    ) -> Result<Vec<SeenRecord>> {
        let seen_records = self.seen_records.lock().await;
        Ok(seen_records
            .values()
            .filter(|record| record.id.model == model && item_ids.contains(&record.id.item))
            .cloned()
            .collect())
    }
}
