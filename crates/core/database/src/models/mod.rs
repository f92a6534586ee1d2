mod migrations;
mod trusted_profiles;
mod trusted_reports;

pub use migrations::*;
pub use trusted_profiles::*;
pub use trusted_reports::*;

#[cfg(feature = "clickhouse")]
use crate::Clickhouse;
use crate::{Database, ReferenceDb};

pub trait AbstractDatabase:
    Sync
    + Send
    + migrations::AbstractMigrations
    + trusted_profiles::AbstractTrustedProfiles
    + trusted_reports::AbstractTrustedReports
{
}

impl AbstractDatabase for ReferenceDb {}
#[cfg(feature = "clickhouse")]
impl AbstractDatabase for Clickhouse {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "clickhouse")]
            Database::Clickhouse(clickhouse) => clickhouse,
        }
    }
}
