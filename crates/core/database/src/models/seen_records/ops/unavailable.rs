use lantern_result::Result;

use crate::{SeenRecord, UnavailableDb};

use super::AbstractSeenRecords;

#[async_trait]
impl AbstractSeenRecords for UnavailableDb {
    /// Acknowledge an item.
    async fn acknowledge_item(
        &self,
        _model: &str,
        _item_id: &str,
        _seen_at: i64,
        _seen_count: i64,
    ) -> Result<()> {
        Err(create_database_error!("update_one", "seen_records"))
    }

    /// Acknowledge many items.
    async fn acknowledge_items(
        &self,
        _model: &str,
        _items: &[(String, i64)],
        _seen_at: i64,
    ) -> Result<()> {
        Err(create_database_error!("insert_many", "seen_records"))
    }

    /// Fetch the seen record for a specific item.
    async fn fetch_seen_record(&self, _model: &str, _item_id: &str) -> Result<Option<SeenRecord>> {
        Err(create_database_error!("find_one", "seen_records"))
    }

    /// Fetch all seen records for a set of items within one model.
    async fn fetch_seen_records(
        &self,
        _model: &str,
        _item_ids: &[String],
    ) -> Result<Vec<SeenRecord>> {
        Err(create_database_error!("find", "seen_records"))
    }
}
