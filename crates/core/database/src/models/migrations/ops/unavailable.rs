use super::AbstractMigrations;
use crate::UnavailableDb;

#[async_trait]
impl AbstractMigrations for UnavailableDb {
    #[cfg(test)]
    /// Drop the database
    async fn drop_database(&self) {}

    /// Migrate the database
    async fn migrate_database(&self) -> Result<(), ()> {
        Err(())
    }
}
