use crate::Clickhouse;

use super::AbstractMigrations;

#[async_trait]
impl AbstractMigrations for Clickhouse {
    /// Migrate the database
    async fn migrate_database(&self) -> Result<(), ()> {
        info!("Migrating the database.");

        self.client
            .query(
                "CREATE TABLE IF NOT EXISTS trusted_reports (
                    id String,
                    publication_id String,
                    actor String,
                    reason String
                )
                ENGINE = MergeTree
                ORDER BY (publication_id, actor)",
            )
            .execute()
            .await
            .map_err(|err| {
                error!("Failed to create trusted_reports: {err}");
            })?;

        self.client
            .query(
                "CREATE TABLE IF NOT EXISTS trusted_profiles (
                    id String
                )
                ENGINE = MergeTree
                ORDER BY id",
            )
            .execute()
            .await
            .map_err(|err| {
                error!("Failed to create trusted_profiles: {err}");
            })
    }
}
