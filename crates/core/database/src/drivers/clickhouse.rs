use crate::util::keyed_lock::KeyedLock;

database_derived!(
    /// ClickHouse implementation
    pub struct Clickhouse {
        pub client: ::clickhouse::Client,
        pub database_name: String,
        pub(crate) submission_locks: KeyedLock,
    }
);

impl Clickhouse {
    pub fn new(client: ::clickhouse::Client, database_name: String) -> Self {
        Clickhouse {
            client,
            database_name,
            submission_locks: KeyedLock::default(),
        }
    }
}
