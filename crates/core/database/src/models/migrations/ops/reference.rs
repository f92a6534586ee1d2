use crate::ReferenceDb;

use super::AbstractMigrations;

#[async_trait]
impl AbstractMigrations for ReferenceDb {
    /// Migrate the database
    async fn migrate_database(&self) -> Result<(), ()> {
        // Nothing to migrate on the in-memory database.
        Ok(())
    }
}
