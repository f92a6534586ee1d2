use bloom_result::Result;
use rocket::serde::json::Json;
use serde::Serialize;

/// # Node Configuration
#[derive(Serialize, Debug)]
pub struct NodeInfo {
    /// Bloom API version
    pub version: String,
    /// URL pointing to the client serving this node
    pub app: String,
}

/// # Query Node
///
/// Fetch the configuration of this Bloom instance.
#[get("/")]
pub async fn root() -> Result<Json<NodeInfo>> {
    let config = bloom_config::config().await;

    Ok(Json(NodeInfo {
        version: crate::VERSION.to_string(),
        app: config.hosts.app,
    }))
}

#[cfg(test)]
mod test {
    use rocket::http::Status;

    use crate::util::test::TestHarness;

    #[rocket::async_test]
    async fn fetch_node_info() {
        let harness = TestHarness::new().await;

        let response = harness.client.get("/").dispatch().await;
        assert_eq!(response.status(), Status::Ok);

        let info: serde_json::Value = response.into_json().await.expect("`NodeInfo`");
        assert_eq!(info["version"], crate::VERSION);
    }
}
