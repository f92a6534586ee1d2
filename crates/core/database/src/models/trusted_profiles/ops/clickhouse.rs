use bloom_result::Result;
use clickhouse::Row;

use crate::Clickhouse;
use crate::TrustedProfile;

use super::AbstractTrustedProfiles;

static COL: &str = "trusted_profiles";

#[derive(Row, Serialize, Deserialize)]
struct TrustedProfileRow {
    id: String,
}

#[async_trait]
impl AbstractTrustedProfiles for Clickhouse {
    /// Check whether the given profile id is registered as trusted
    async fn is_trusted_profile(&self, id: &str) -> Result<bool> {
        self.client
            .query("SELECT count() FROM trusted_profiles WHERE id = ?")
            .bind(id)
            .fetch_one::<u64>()
            .await
            .map(|count| count > 0)
            .map_err(|err| {
                error!("Failed to look up trusted profile: {err}");
                create_database_error!("count", COL)
            })
    }

    /// Register a profile as trusted
    async fn insert_trusted_profile(&self, profile: &TrustedProfile) -> Result<()> {
        let mut insert = self.client.insert(COL).map_err(|err| {
            error!("Failed to open insert: {err}");
            create_database_error!("insert", COL)
        })?;

        insert
            .write(&TrustedProfileRow {
                id: profile.id.to_string(),
            })
            .await
            .map_err(|err| {
                error!("Failed to write profile row: {err}");
                create_database_error!("insert", COL)
            })?;

        insert.end().await.map_err(|err| {
            error!("Failed to commit profile row: {err}");
            create_database_error!("insert", COL)
        })
    }
}
