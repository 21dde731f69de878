use std::collections::HashMap;

use iso8601_timestamp::Timestamp;
use lantern_database::{timestamp_to_millis, Database, SeenRecord};
use lantern_models::v0::{Item, SeenPolicy, SeenView};
use lantern_result::Result;

use crate::classify;

/// Tracks which items a browsing session has already seen.
///
/// Storage failures never surface to the caller: writes are dropped
/// with a warning and reads degrade to "never seen", so a broken store
/// only ever makes content look new again.
pub struct SeenTracker {
    db: Database,
    policies: HashMap<String, SeenPolicy>,
}

impl SeenTracker {
    pub fn new(db: Database, policies: HashMap<String, SeenPolicy>) -> SeenTracker {
        SeenTracker { db, policies }
    }

    /// Create a tracker with the policy map from `[seen.policy]`
    pub async fn from_config(db: Database) -> Result<SeenTracker> {
        let config = lantern_config::config().await;

        let mut policies = HashMap::new();
        for (model, action) in config.seen.policy {
            let policy = match action.as_str() {
                "hide" => SeenPolicy::Hide,
                "deemphasize" => SeenPolicy::Deemphasize,
                _ => {
                    error!("Unknown seen policy {action:?} for model {model:?}");
                    return Err(create_error!(InvalidProperty));
                }
            };

            policies.insert(model, policy);
        }

        Ok(SeenTracker::new(db, policies))
    }

    /// Policy for a model, defaulting to deemphasize
    fn policy(&self, model: &str) -> SeenPolicy {
        self.policies.get(model).cloned().unwrap_or_default()
    }

    /// Record that an item has been viewed right now.
    ///
    /// Last write wins; any prior record is overwritten whole.
    pub async fn acknowledge(&self, item: &Item) {
        let seen_at = timestamp_to_millis(Timestamp::now_utc());

        if let Err(error) = self
            .db
            .acknowledge_item(&item.model, &item.id, seen_at, item.count)
            .await
        {
            // Fail through; the item will simply show as new again
            warn!(
                "Failed to acknowledge {} {}: {error:?}",
                item.model, item.id
            );
        }
    }

    /// Acknowledge every given item of one model under a single timestamp
    pub async fn acknowledge_all(&self, model: &str, items: &[Item]) {
        let batch = items
            .iter()
            .filter(|item| {
                if item.model == model {
                    true
                } else {
                    warn!(
                        "Skipping {} {} in bulk acknowledge for model {model:?}",
                        item.model, item.id
                    );
                    false
                }
            })
            .map(|item| (item.id.clone(), item.count))
            .collect::<Vec<(String, i64)>>();

        let seen_at = timestamp_to_millis(Timestamp::now_utc());

        if let Err(error) = self.db.acknowledge_items(model, &batch, seen_at).await {
            warn!("Failed to acknowledge {} items of {model:?}: {error:?}", batch.len());
        }
    }

    /// Derive the display decision for one item
    pub async fn evaluate(&self, item: &Item) -> SeenView {
        let record = match self.db.fetch_seen_record(&item.model, &item.id).await {
            Ok(record) => record,
            Err(error) => {
                // Fail open: without the store everything shows as new
                warn!(
                    "Failed to read seen record for {} {}: {error:?}",
                    item.model, item.id
                );
                None
            }
        };

        classify(item, record.as_ref(), self.policy(&item.model))
    }

    /// Derive display decisions for a whole listing with one store read.
    ///
    /// Returns one view per input item, in order. Items of other models
    /// fall back to individual evaluation.
    pub async fn evaluate_all(&self, model: &str, items: &[Item]) -> Vec<SeenView> {
        let item_ids = items
            .iter()
            .filter(|item| item.model == model)
            .map(|item| item.id.clone())
            .collect::<Vec<String>>();

        let records = match self.db.fetch_seen_records(model, &item_ids).await {
            Ok(records) => records,
            Err(error) => {
                warn!("Failed to read seen records for model {model:?}: {error:?}");
                vec![]
            }
        };

        let by_id = records
            .iter()
            .map(|record| (record.id.item.as_str(), record))
            .collect::<HashMap<&str, &SeenRecord>>();

        let mut views = Vec::with_capacity(items.len());
        for item in items {
            if item.model == model {
                views.push(classify(
                    item,
                    by_id.get(item.id.as_str()).copied(),
                    self.policy(model),
                ));
            } else {
                views.push(self.evaluate(item).await);
            }
        }

        views
    }
}
