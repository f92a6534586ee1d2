use bloom_result::Result;
use clickhouse::Row;

use crate::Clickhouse;
use crate::{ReportSubmission, TrustedReport};

use super::AbstractTrustedReports;

static COL: &str = "trusted_reports";

#[derive(Row, Serialize, Deserialize)]
struct TrustedReportRow {
    id: String,
    publication_id: String,
    actor: String,
    reason: String,
}

impl From<&TrustedReport> for TrustedReportRow {
    fn from(report: &TrustedReport) -> Self {
        TrustedReportRow {
            id: report.id.to_string(),
            publication_id: report.publication_id.to_string(),
            actor: report.actor.to_string(),
            reason: report.reason.to_string(),
        }
    }
}

#[async_trait]
impl AbstractTrustedReports for Clickhouse {
    /// Submit a report unless the actor already reported this publication
    async fn submit_trusted_report(&self, report: &TrustedReport) -> Result<ReportSubmission> {
        // MergeTree tables cannot reject duplicate keys, so submissions
        // for the same (publication, actor) are serialised instead.
        let _guard = self
            .submission_locks
            .acquire(format!("{}:{}", report.publication_id, report.actor))
            .await;

        let count = self
            .client
            .query("SELECT count() FROM trusted_reports WHERE publication_id = ? AND actor = ?")
            .bind(&report.publication_id)
            .bind(&report.actor)
            .fetch_one::<u64>()
            .await
            .map_err(|err| {
                error!("Failed to count existing reports: {err}");
                create_database_error!("count", COL)
            })?;

        if count > 0 {
            return Ok(ReportSubmission::Duplicate);
        }

        let mut insert = self.client.insert(COL).map_err(|err| {
            error!("Failed to open insert: {err}");
            create_database_error!("insert", COL)
        })?;

        insert
            .write(&TrustedReportRow::from(report))
            .await
            .map_err(|err| {
                error!("Failed to write report row: {err}");
                create_database_error!("insert", COL)
            })?;

        insert.end().await.map_err(|err| {
            error!("Failed to commit report row: {err}");
            create_database_error!("insert", COL)
        })?;

        Ok(ReportSubmission::Created)
    }
}
