use bloom_result::Result;

use crate::TrustedProfile;

#[cfg(feature = "clickhouse")]
mod clickhouse;
mod reference;

#[async_trait]
pub trait AbstractTrustedProfiles: Sync + Send {
    /// Check whether the given profile id is registered as trusted
    async fn is_trusted_profile(&self, id: &str) -> Result<bool>;

    /// Register a profile as trusted
    async fn insert_trusted_profile(&self, profile: &TrustedProfile) -> Result<()>;
}
