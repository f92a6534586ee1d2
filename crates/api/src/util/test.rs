use bloom_database::{Database, DatabaseInfo, TrustedProfile};
use jsonwebtoken::{encode, EncodingKey, Header};
use rocket::local::asynchronous::Client;

use super::credential::Claims;

pub struct TestHarness {
    pub db: Database,
    pub client: Client,
}

impl TestHarness {
    pub async fn new() -> TestHarness {
        dotenv::dotenv().ok();

        let db = DatabaseInfo::Reference
            .connect()
            .await
            .expect("Database connection failed.");

        let client = Client::tracked(crate::build(db.clone()))
            .await
            .expect("valid rocket instance");

        TestHarness { db, client }
    }

    /// Register a trusted profile and mint an access token for it
    pub async fn trusted_profile(&self, id: &str) -> String {
        self.db
            .insert_trusted_profile(&TrustedProfile { id: id.to_string() })
            .await
            .expect("`TrustedProfile`");

        Self::access_token(id)
    }

    /// Mint an access token for the given profile id
    ///
    /// Signed with a throwaway key; the service does not verify
    /// signatures, that happens upstream.
    pub fn access_token(id: &str) -> String {
        encode(
            &Header::default(),
            &Claims { id: id.to_string() },
            &EncodingKey::from_secret(b"test"),
        )
        .expect("`Claims`")
    }
}
