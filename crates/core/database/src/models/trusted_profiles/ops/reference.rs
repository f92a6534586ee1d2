use bloom_result::Result;

use crate::ReferenceDb;
use crate::TrustedProfile;

use super::AbstractTrustedProfiles;

#[async_trait]
impl AbstractTrustedProfiles for ReferenceDb {
    /// Check whether the given profile id is registered as trusted
    async fn is_trusted_profile(&self, id: &str) -> Result<bool> {
        let profiles = self.trusted_profiles.lock().await;
        Ok(profiles.contains_key(id))
    }

    /// Register a profile as trusted
    async fn insert_trusted_profile(&self, profile: &TrustedProfile) -> Result<()> {
        let mut profiles = self.trusted_profiles.lock().await;
        if profiles.contains_key(&profile.id) {
            Err(create_database_error!("insert", "trusted_profiles"))
        } else {
            profiles.insert(profile.id.to_string(), profile.clone());
            Ok(())
        }
    }
}
