use super::AbstractMigrations;
use crate::ReferenceDb;

#[async_trait]
impl AbstractMigrations for ReferenceDb {
    #[cfg(test)]
    /// Drop the database
    async fn drop_database(&self) {
        self.seen_records.lock().await.clear();
    }

    /// Migrate the database
    async fn migrate_database(&self) -> Result<(), ()> {
        // Nothing to migrate
        Ok(())
    }
}
