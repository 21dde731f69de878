use bson::Document;
use lantern_result::Result;
use mongodb::options::UpdateOptions;

use crate::MongoDb;
use crate::SeenRecord;

use super::AbstractSeenRecords;

static COL: &str = "seen_records";

#[async_trait]
impl AbstractSeenRecords for MongoDb {
    /// Acknowledge an item.
    async fn acknowledge_item(
        &self,
        model: &str,
        item_id: &str,
        seen_at: i64,
        seen_count: i64,
    ) -> Result<()> {
        self.col::<Document>(COL)
            .update_one(
                doc! {
                    "_id.model": model,
                    "_id.item": item_id,
                },
                doc! {
                    "$set": {
                        "seen_at": seen_at,
                        "seen_count": seen_count
                    }
                },
            )
            .with_options(UpdateOptions::builder().upsert(true).build())
            .await
            .map(|_| ())
            .map_err(|_| create_database_error!("update_one", COL))
    }

    /// Acknowledge many items.
    async fn acknowledge_items(
        &self,
        model: &str,
        items: &[(String, i64)],
        seen_at: i64,
    ) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }

        let item_ids = items
            .iter()
            .map(|(item_id, _)| item_id.clone())
            .collect::<Vec<String>>();

        self.col::<Document>(COL)
            .delete_many(doc! {
                "_id.model": model,
                "_id.item": {
                    "$in": item_ids
                }
            })
            .await
            .map_err(|_| create_database_error!("delete_many", COL))?;

        self.col::<Document>(COL)
            .insert_many(
                items
                    .iter()
                    .map(|(item_id, count)| {
                        doc! {
                            "_id": {
                                "model": model,
                                "item": item_id
                            },
                            "seen_at": seen_at,
                            "seen_count": *count
                        }
                    })
                    .collect::<Vec<Document>>(),
            )
            .await
            .map(|_| ())
            .map_err(|_| create_database_error!("insert_many", COL))
    }

    /// Fetch the seen record for a specific item.
    async fn fetch_seen_record(&self, model: &str, item_id: &str) -> Result<Option<SeenRecord>> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "_id.model": model,
                "_id.item": item_id
            }
        )
    }

    /// Fetch all seen records for a set of items within one model.
    async fn fetch_seen_records(
        &self,
        model: &str,
        item_ids: &[String],
    ) -> Result<Vec<SeenRecord>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "_id.model": model,
                "_id.item": {
                    "$in": item_ids
                }
            }
        )
    }
}
