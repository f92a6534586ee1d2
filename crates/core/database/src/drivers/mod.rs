#[cfg(feature = "clickhouse")]
mod clickhouse;
mod reference;

use bloom_config::config;
use rand::Rng;

#[cfg(feature = "clickhouse")]
pub use self::clickhouse::*;
pub use self::reference::*;

/// Database information to use to create a client
pub enum DatabaseInfo {
    /// Auto-detect the database in use
    Auto,
    /// Auto-detect the database in use and create an empty testing database
    Test(String),
    /// Use the mock database
    Reference,
    /// Connect to ClickHouse
    #[cfg(feature = "clickhouse")]
    Clickhouse { url: String, database_name: String },
}

/// Database
#[derive(Clone)]
pub enum Database {
    /// Mock database
    Reference(ReferenceDb),
    /// ClickHouse database
    #[cfg(feature = "clickhouse")]
    Clickhouse(Clickhouse),
}

impl DatabaseInfo {
    /// Create a database client from the given database information
    #[async_recursion]
    pub async fn connect(self) -> Result<Database, String> {
        let config = config().await;

        match self {
            DatabaseInfo::Auto => {
                if std::env::var("TEST_DB").is_ok() {
                    DatabaseInfo::Test(format!(
                        "bloom_test_{}",
                        rand::thread_rng().gen_range(1_000_000..10_000_000)
                    ))
                    .connect()
                    .await
                } else if !config.database.clickhouse.is_empty() {
                    #[cfg(feature = "clickhouse")]
                    return DatabaseInfo::Clickhouse {
                        url: config.database.clickhouse,
                        database_name: config.database.database_name,
                    }
                    .connect()
                    .await;

                    #[cfg(not(feature = "clickhouse"))]
                    return Err("ClickHouse not enabled.".to_string());
                } else {
                    DatabaseInfo::Reference.connect().await
                }
            }
            DatabaseInfo::Test(database_name) => {
                match std::env::var("TEST_DB")
                    .expect(
                        "`TEST_DB` environment variable should be set to REFERENCE or CLICKHOUSE",
                    )
                    .as_str()
                {
                    "REFERENCE" => DatabaseInfo::Reference.connect().await,
                    "CLICKHOUSE" => {
                        #[cfg(feature = "clickhouse")]
                        return DatabaseInfo::Clickhouse {
                            url: config.database.clickhouse,
                            database_name,
                        }
                        .connect()
                        .await;

                        #[cfg(not(feature = "clickhouse"))]
                        return Err("ClickHouse not enabled.".to_string());
                    }
                    _ => unreachable!("must specify REFERENCE or CLICKHOUSE"),
                }
            }
            DatabaseInfo::Reference => Ok(Database::Reference(Default::default())),
            #[cfg(feature = "clickhouse")]
            DatabaseInfo::Clickhouse { url, database_name } => {
                let client = ::clickhouse::Client::default()
                    .with_url(url)
                    .with_database(&database_name);

                Ok(Database::Clickhouse(Clickhouse::new(client, database_name)))
            }
        }
    }
}
