mod migrations;
mod seen_records;

pub use migrations::*;
pub use seen_records::*;

#[cfg(feature = "mongodb")]
use crate::MongoDb;
#[cfg(feature = "test-util")]
use crate::UnavailableDb;
use crate::{Database, ReferenceDb};

pub trait AbstractDatabase:
    Sync + Send + migrations::AbstractMigrations + seen_records::AbstractSeenRecords
{
}

impl AbstractDatabase for ReferenceDb {}
#[cfg(feature = "mongodb")]
impl AbstractDatabase for MongoDb {}
#[cfg(feature = "test-util")]
impl AbstractDatabase for UnavailableDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => mongo,
            #[cfg(feature = "test-util")]
            Database::Unavailable(unavailable) => unavailable,
        }
    }
}
