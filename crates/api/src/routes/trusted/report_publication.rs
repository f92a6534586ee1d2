use bloom_database::{Database, ReportSubmission, TrustedReport};
use bloom_result::{create_error, Result};
use rocket::State;
use serde::{Deserialize, Serialize};
use ulid::Ulid;
use validator::Validate;

use crate::util::credential;
use crate::util::json::Json;
use crate::util::token::AccessToken;
use crate::util::trust;

/// # Report Data
#[derive(Validate, Deserialize, Debug)]
pub struct DataReportPublication {
    /// Publication being reported
    #[validate(length(min = 1))]
    id: String,
    /// Reason for the report
    #[validate(length(min = 1, max = 1000))]
    reason: String,
}

/// # Report Response
#[derive(Serialize, Debug)]
pub struct ResponseReportPublication {
    /// Whether a new report was created
    pub success: bool,
    /// Id of the created report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Explanation when no report was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// # Report Publication
///
/// Report a publication to the moderation team.
///
/// Only trusted profiles may report, and a given profile can report a
/// given publication at most once; resubmissions are acknowledged
/// without creating another report.
#[post("/report", data = "<data>")]
pub async fn report_publication(
    db: &State<Database>,
    token: Option<AccessToken>,
    data: Json<DataReportPublication>,
) -> Result<Json<ResponseReportPublication>> {
    let data = data.into_inner();
    data.validate()
        .map_err(|error| create_error!(FailedValidation {
            error: error.to_string()
        }))?;

    let token = token.ok_or_else(|| create_error!(NotAuthorized))?;
    if !trust::validate_is_trusted(db, &token).await {
        return Err(create_error!(NotAuthorized));
    }

    // The actor is whoever the credential says, never the request body
    let actor = credential::decode(token.value())?.id;

    let report = TrustedReport {
        id: Ulid::new().to_string(),
        publication_id: data.id,
        actor,
        reason: data.reason,
    };

    match db.submit_trusted_report(&report).await? {
        ReportSubmission::Created => {
            info!(
                "Reported publication {} by trusted profile {}.",
                report.publication_id, report.actor
            );

            Ok(Json(ResponseReportPublication {
                success: true,
                id: Some(report.id),
                message: None,
            }))
        }
        ReportSubmission::Duplicate => Ok(Json(ResponseReportPublication {
            success: false,
            id: None,
            message: Some("You already reported this publication!".to_string()),
        })),
    }
}

#[cfg(test)]
mod test {
    use bloom_database::Database;
    use rocket::http::{ContentType, Header, Status};

    use crate::util::test::TestHarness;

    #[rocket::async_test]
    async fn report_then_detect_duplicate() {
        let harness = TestHarness::new().await;
        let token = harness.trusted_profile("0xabc").await;

        let response = harness
            .client
            .post("/trusted/report")
            .header(ContentType::JSON)
            .header(Header::new("x-access-token", token.clone()))
            .body(json!({ "id": "pub_123", "reason": "spam" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        let body: serde_json::Value = response.into_json().await.expect("JSON body");
        assert_eq!(body["success"], true);
        assert!(!body["id"].as_str().expect("report id").is_empty());

        let response = harness
            .client
            .post("/trusted/report")
            .header(ContentType::JSON)
            .header(Header::new("x-access-token", token))
            .body(json!({ "id": "pub_123", "reason": "spam" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        let body: serde_json::Value = response.into_json().await.expect("JSON body");
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "You already reported this publication!");

        match &harness.db {
            Database::Reference(db) => {
                assert_eq!(db.trusted_reports.lock().await.len(), 1)
            }
            _ => unreachable!(),
        }
    }

    #[rocket::async_test]
    async fn invalid_body_is_rejected_before_any_write() {
        let harness = TestHarness::new().await;
        let token = harness.trusted_profile("0xabc").await;

        let response = harness
            .client
            .post("/trusted/report")
            .header(ContentType::JSON)
            .header(Header::new("x-access-token", token))
            .body(json!({ "id": "pub_123" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        let body: serde_json::Value = response.into_json().await.expect("JSON body");
        assert_eq!(body["type"], "InvalidBody");

        match &harness.db {
            Database::Reference(db) => {
                assert!(db.trusted_reports.lock().await.is_empty())
            }
            _ => unreachable!(),
        }
    }

    #[rocket::async_test]
    async fn empty_publication_id_fails_validation() {
        let harness = TestHarness::new().await;
        let token = harness.trusted_profile("0xabc").await;

        let response = harness
            .client
            .post("/trusted/report")
            .header(ContentType::JSON)
            .header(Header::new("x-access-token", token))
            .body(json!({ "id": "", "reason": "spam" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        let body: serde_json::Value = response.into_json().await.expect("JSON body");
        assert_eq!(body["type"], "FailedValidation");
    }

    #[rocket::async_test]
    async fn empty_body_is_rejected() {
        let harness = TestHarness::new().await;
        let token = harness.trusted_profile("0xabc").await;

        let response = harness
            .client
            .post("/trusted/report")
            .header(ContentType::JSON)
            .header(Header::new("x-access-token", token))
            .body("")
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        let body: serde_json::Value = response.into_json().await.expect("JSON body");
        assert_eq!(body["type"], "NoBody");
    }

    #[rocket::async_test]
    async fn missing_token_is_rejected() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .post("/trusted/report")
            .header(ContentType::JSON)
            .body(json!({ "id": "pub_123", "reason": "spam" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Forbidden);
    }

    #[rocket::async_test]
    async fn untrusted_profile_is_rejected() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .post("/trusted/report")
            .header(ContentType::JSON)
            .header(Header::new(
                "x-access-token",
                TestHarness::access_token("0xabc"),
            ))
            .body(json!({ "id": "pub_123", "reason": "spam" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Forbidden);

        match &harness.db {
            Database::Reference(db) => {
                assert!(db.trusted_reports.lock().await.is_empty())
            }
            _ => unreachable!(),
        }
    }

    #[rocket::async_test]
    async fn malformed_token_is_rejected() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .post("/trusted/report")
            .header(ContentType::JSON)
            .header(Header::new("x-access-token", "not-a-token"))
            .body(json!({ "id": "pub_123", "reason": "spam" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Forbidden);
    }
}
