//! Runtime environment API operations

use log::debug;
use reqwest::{Method, StatusCode};

use crate::config::api;
use crate::error::Result;
use crate::idmc::client::segment;
use crate::idmc::transport::new_json_request;
use crate::idmc::IdmcClient;

use super::models::{RuntimeEnvironment, RuntimeEnvironmentAgent, RuntimeEnvironmentRequest};

impl IdmcClient {
    /// List all runtime environments of the organization
    pub async fn list_runtime_environments(&self) -> Result<Vec<RuntimeEnvironment>> {
        let url = self.url(api::RUNTIME_ENVIRONMENTS)?;
        debug!("Fetching runtime environments: {}", url);

        let response = self.get(url).await?;
        self.parse_api_response(
            &response,
            &[StatusCode::OK],
            "fetch runtime environments",
        )
    }

    /// Get a runtime environment by id
    ///
    /// Returns `None` on 404.
    pub async fn get_runtime_environment(&self, id: &str) -> Result<Option<RuntimeEnvironment>> {
        let url = self.url(&format!("{}/{}", api::RUNTIME_ENVIRONMENTS, segment(id)))?;
        debug!("Fetching runtime environment: {}", url);

        let response = self.get(url).await?;
        if response.status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        self.parse_api_response(
            &response,
            &[StatusCode::OK],
            &format!("fetch runtime environment '{}'", id),
        )
        .map(Some)
    }

    /// Create a runtime environment
    pub async fn create_runtime_environment(
        &self,
        name: &str,
        shared: bool,
    ) -> Result<RuntimeEnvironment> {
        let url = self.url(api::RUNTIME_ENVIRONMENTS)?;
        debug!("Creating runtime environment '{}' (shared: {})", name, shared);

        let body = RuntimeEnvironmentRequest::create(name, shared);
        let response = self.send(new_json_request(Method::POST, url, &body)?).await?;
        self.parse_api_response(
            &response,
            &[StatusCode::OK],
            &format!("create runtime environment '{}'", name),
        )
    }

    /// Replace the name, sharing flag and agents of a runtime environment
    pub async fn update_runtime_environment(
        &self,
        id: &str,
        name: &str,
        shared: bool,
        agents: &[RuntimeEnvironmentAgent],
    ) -> Result<RuntimeEnvironment> {
        let url = self.url(&format!("{}/{}", api::RUNTIME_ENVIRONMENTS, segment(id)))?;
        debug!(
            "Updating runtime environment {} ({} agent(s))",
            id,
            agents.len()
        );

        let body = RuntimeEnvironmentRequest::update(name, shared, agents);
        let response = self.send(new_json_request(Method::PUT, url, &body)?).await?;
        self.parse_api_response(
            &response,
            &[StatusCode::OK],
            &format!("update runtime environment '{}'", id),
        )
    }

    /// Delete a runtime environment by id
    pub async fn delete_runtime_environment(&self, id: &str) -> Result<()> {
        let url = self.url(&format!("{}/{}", api::RUNTIME_ENVIRONMENTS, segment(id)))?;
        debug!("Deleting runtime environment {}", id);

        let response = self.delete(url).await?;
        self.require_status(
            &response,
            &[StatusCode::OK, StatusCode::NO_CONTENT],
            &format!("delete runtime environment '{}'", id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdmcError;
    use crate::idmc::client::test_client;
    use crate::idmc::testing::RecordingTransport;
    use crate::idmc::transport::{build_http_client, HttpSettings};
    use crate::idmc::Session;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn rte_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "@type": "runtimeEnvironment",
            "id": id,
            "orgId": "org-1",
            "name": name,
            "agents": [],
            "isShared": false
        })
    }

    async fn mock_client(server: &MockServer) -> IdmcClient {
        let http = build_http_client(&HttpSettings::default()).unwrap();
        IdmcClient::new(http, Session::new("abc123", format!("{}/saas", server.uri())))
    }

    #[tokio::test]
    async fn test_get_runtime_environment() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/saas/api/v2/runtimeEnvironment/rte-1"))
            .and(header("icSessionId", "abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(rte_json("rte-1", "dev")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server).await;
        let rte = client.get_runtime_environment("rte-1").await.unwrap();

        assert_eq!(rte.unwrap().name(), "dev");
    }

    #[tokio::test]
    async fn test_get_runtime_environment_not_found() {
        let transport = RecordingTransport::new();
        transport.push_json(
            StatusCode::NOT_FOUND,
            serde_json::json!({"@type": "error", "code": "APP_60001", "description": "not found", "statusCode": 404}),
        );
        let client = test_client(transport);

        assert!(client
            .get_runtime_environment("missing")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_get_runtime_environment_server_error() {
        let transport = RecordingTransport::new();
        transport.push_raw(StatusCode::INTERNAL_SERVER_ERROR, Vec::new());
        let client = test_client(transport);

        let err = client.get_runtime_environment("rte-1").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_list_runtime_environments() {
        let transport = RecordingTransport::new();
        transport.push_json(
            StatusCode::OK,
            serde_json::json!([rte_json("rte-1", "dev"), rte_json("rte-2", "prod")]),
        );
        let client = test_client(transport.clone());

        let rtes = client.list_runtime_environments().await.unwrap();

        assert_eq!(rtes.len(), 2);
        let requests = transport.requests();
        assert_eq!(requests[0].url.path(), "/saas/api/v2/runtimeEnvironment");
        assert_eq!(requests[0].headers["icSessionId"], "abc123");
        assert_eq!(requests[0].headers["serverUrl"], "https://x.example/saas");
    }

    #[tokio::test]
    async fn test_create_runtime_environment() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/saas/api/v2/runtimeEnvironment"))
            .and(body_json(serde_json::json!({
                "@type": "runtimeEnvironment",
                "name": "dev",
                "isShared": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(rte_json("rte-9", "dev")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server).await;
        let rte = client.create_runtime_environment("dev", true).await.unwrap();

        assert_eq!(rte.id, "rte-9");
    }

    #[tokio::test]
    async fn test_update_runtime_environment() {
        let transport = RecordingTransport::new();
        transport.push_json(StatusCode::OK, rte_json("rte-1", "renamed"));
        let client = test_client(transport.clone());

        let agents = vec![RuntimeEnvironmentAgent {
            id: "a-1".to_string(),
            org_id: Some("org-1".to_string()),
            name: None,
        }];
        let rte = client
            .update_runtime_environment("rte-1", "renamed", false, &agents)
            .await
            .unwrap();

        assert_eq!(rte.name(), "renamed");
        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::PUT);
        assert_eq!(requests[0].url.path(), "/saas/api/v2/runtimeEnvironment/rte-1");
        assert_eq!(
            requests[0].json(),
            serde_json::json!({
                "@type": "runtimeEnvironment",
                "name": "renamed",
                "isShared": false,
                "agents": [{"id": "a-1", "orgId": "org-1"}]
            })
        );
    }

    #[tokio::test]
    async fn test_delete_runtime_environment_conflict() {
        let transport = RecordingTransport::new();
        transport.push_json(
            StatusCode::BAD_REQUEST,
            serde_json::json!({
                "@type": "error",
                "code": "RuntimeEnvironment_017",
                "description": "Runtime environment is in use",
                "statusCode": 400
            }),
        );
        let client = test_client(transport);

        let err = client.delete_runtime_environment("rte-1").await.unwrap_err();
        match err {
            IdmcError::Api { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("in use"));
            }
            other => panic!("Expected IdmcError::Api, got {:?}", other),
        }
    }
}
