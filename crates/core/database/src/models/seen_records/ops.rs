use lantern_result::Result;

use crate::SeenRecord;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;
#[cfg(feature = "test-util")]
mod unavailable;

#[async_trait]
pub trait AbstractSeenRecords: Sync + Send {
    /// Acknowledge an item, overwriting any existing record.
    async fn acknowledge_item(
        &self,
        model: &str,
        item_id: &str,
        seen_at: i64,
        seen_count: i64,
    ) -> Result<()>;

    /// Acknowledge many items of one model under a single timestamp.
    ///
    /// Takes pairs of item id and current count.
    async fn acknowledge_items(
        &self,
        model: &str,
        items: &[(String, i64)],
        seen_at: i64,
    ) -> Result<()>;

    /// Fetch the seen record for a specific item.
    async fn fetch_seen_record(&self, model: &str, item_id: &str) -> Result<Option<SeenRecord>>;

    /// Fetch all seen records for a set of items within one model.
    async fn fetch_seen_records(&self, model: &str, item_ids: &[String])
        -> Result<Vec<SeenRecord>>;
}
