use bloom_result::Result;

use crate::ReferenceDb;
use crate::{ReportSubmission, TrustedReport};

use super::AbstractTrustedReports;

#[async_trait]
impl AbstractTrustedReports for ReferenceDb {
    /// Submit a report unless the actor already reported this publication
    async fn submit_trusted_report(&self, report: &TrustedReport) -> Result<ReportSubmission> {
        // Check and insert under one lock, the invariant holds by construction.
        let mut reports = self.trusted_reports.lock().await;
        let key = (report.publication_id.to_string(), report.actor.to_string());

        if reports.contains_key(&key) {
            Ok(ReportSubmission::Duplicate)
        } else {
            reports.insert(key, report.clone());
            Ok(ReportSubmission::Created)
        }
    }
}
