use bloom_result::Result;

use crate::{ReportSubmission, TrustedReport};

#[cfg(feature = "clickhouse")]
mod clickhouse;
mod reference;

#[async_trait]
pub trait AbstractTrustedReports: Sync + Send {
    /// Submit a report unless the actor already reported this publication
    ///
    /// Implementations must uphold "at most one report per
    /// (publication, actor)" even under concurrent submissions.
    async fn submit_trusted_report(&self, report: &TrustedReport) -> Result<ReportSubmission>;
}
