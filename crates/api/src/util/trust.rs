use bloom_database::Database;

use super::credential;
use super::token::AccessToken;

/// Gate requests on the trusted profile registry
///
/// Any failure while evaluating trust results in a rejection.
pub async fn validate_is_trusted(db: &Database, token: &AccessToken) -> bool {
    let claims = match credential::decode(token.value()) {
        Ok(claims) => claims,
        Err(_) => return false,
    };

    match db.is_trusted_profile(&claims.id).await {
        Ok(trusted) => trusted,
        Err(error) => {
            warn!("Trust registry lookup failed ({error:?}), rejecting request.");
            false
        }
    }
}
