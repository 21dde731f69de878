use bson::{from_document, Document};

use super::AbstractMigrations;
use crate::{MigrationInfo, MongoDb};

/// MUST BE +1 to last migration
pub const LATEST_REVISION: i32 = 1;

#[async_trait]
impl AbstractMigrations for MongoDb {
    #[cfg(test)]
    /// Drop the database
    async fn drop_database(&self) {
        self.db().drop().await.ok();
    }

    /// Migrate the database
    async fn migrate_database(&self) -> Result<(), ()> {
        info!("Migrating the database.");

        let list = self
            .list_database_names()
            .await
            .expect("Failed to fetch database names.");

        if list.iter().any(|x| x == &self.1) {
            migrate_existing_database(self).await;
        } else {
            create_database(self).await;
        }

        Ok(())
    }
}

async fn create_database(db: &MongoDb) {
    info!("Creating database.");
    let db = db.db();

    db.create_collection("seen_records")
        .await
        .expect("Failed to create seen_records collection.");

    db.create_collection("migrations")
        .await
        .expect("Failed to create migrations collection.");

    db.collection("migrations")
        .insert_one(doc! {
            "_id": 0_i32,
            "revision": LATEST_REVISION
        })
        .await
        .expect("Failed to save migration info.");
}

async fn migrate_existing_database(db: &MongoDb) {
    let migrations = db.col::<Document>("migrations");
    let data = migrations
        .find_one(doc! {})
        .await
        .expect("Failed to fetch migration data.");

    if let Some(doc) = data {
        let info: MigrationInfo =
            from_document(doc).expect("Failed to read migration information.");

        if info.revision < LATEST_REVISION {
            migrations
                .update_one(
                    doc! {
                        "_id": info.id
                    },
                    doc! {
                        "$set": {
                            "revision": LATEST_REVISION
                        }
                    },
                )
                .await
                .expect("Failed to save migration information.");
        }
    }
}
