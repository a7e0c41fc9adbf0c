//! Role API operations

use log::debug;
use reqwest::{Method, StatusCode};

use crate::config::api;
use crate::error::{IdmcError, Result};
use crate::idmc::client::segment;
use crate::idmc::reconcile::{reconcile, PrivilegeSet, ReconcilePhase, ReconciliationPlan};
use crate::idmc::transport::new_json_request;
use crate::idmc::IdmcClient;

use super::models::{CreateRoleRequest, Role, RoleFilter, RolePrivilegesRequest};

impl IdmcClient {
    /// List roles, optionally narrowed by id or name
    pub async fn list_roles(&self, filter: &RoleFilter, expand_privileges: bool) -> Result<Vec<Role>> {
        let q = filter.query()?;
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(q) = q.as_deref() {
            query.push(("q", q));
        }
        if expand_privileges {
            query.push(("expand", "privileges"));
        }

        let url = self.url_with_query(api::ROLES, &query)?;
        debug!("Fetching roles: {}", url);

        let response = self.get(url).await?;
        self.parse_api_response(&response, &[StatusCode::OK], "fetch roles")
    }

    /// Get a role by id, with its privileges
    ///
    /// Returns `None` when no role has that id.
    pub async fn get_role(&self, role_id: &str) -> Result<Option<Role>> {
        let roles = self
            .list_roles(&RoleFilter::Id(role_id.to_string()), true)
            .await?;
        single_role(roles, &format!("id '{}'", role_id))
    }

    /// Get a role by exact name, with its privileges
    pub async fn get_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        let roles = self
            .list_roles(&RoleFilter::Name(name.to_string()), true)
            .await?;
        single_role(roles, &format!("name '{}'", name))
    }

    /// Create a role with an initial set of privileges
    pub async fn create_role(
        &self,
        name: &str,
        description: Option<&str>,
        privileges: &PrivilegeSet,
    ) -> Result<Role> {
        let url = self.url(api::ROLES)?;
        let body = CreateRoleRequest {
            name,
            description,
            privileges: privileges.iter().map(String::as_str).collect(),
        };
        debug!("Creating role '{}' with {} privilege(s)", name, privileges.len());

        let response = self.send(new_json_request(Method::POST, url, &body)?).await?;
        self.parse_api_response(
            &response,
            &[StatusCode::OK],
            &format!("create role '{}'", name),
        )
    }

    /// Delete a role by id
    pub async fn delete_role(&self, role_id: &str) -> Result<()> {
        let url = self.url(&format!("{}/{}", api::ROLES, segment(role_id)))?;
        debug!("Deleting role {}", role_id);

        let response = self.delete(url).await?;
        self.require_status(
            &response,
            &[StatusCode::OK, StatusCode::NO_CONTENT],
            &format!("delete role '{}'", role_id),
        )
    }

    /// Grant privileges to a role in one call
    pub async fn add_role_privileges(&self, role_id: &str, privileges: &PrivilegeSet) -> Result<()> {
        self.change_role_privileges(role_id, "addPrivileges", privileges)
            .await
    }

    /// Revoke privileges from a role in one call
    pub async fn remove_role_privileges(
        &self,
        role_id: &str,
        privileges: &PrivilegeSet,
    ) -> Result<()> {
        self.change_role_privileges(role_id, "removePrivileges", privileges)
            .await
    }

    async fn change_role_privileges(
        &self,
        role_id: &str,
        action: &str,
        privileges: &PrivilegeSet,
    ) -> Result<()> {
        let url = self.url(&format!("{}/{}/{}", api::ROLES, segment(role_id), action))?;
        debug!("{} on role {}: {:?}", action, role_id, privileges);

        let request = new_json_request(Method::PUT, url, &RolePrivilegesRequest::new(privileges))?;
        let response = self.send(request).await?;
        self.require_status(
            &response,
            &[StatusCode::OK],
            &format!("{} on role '{}'", action, role_id),
        )
    }

    /// Move a role's privileges from `previous` to `desired`
    ///
    /// Additions go first, then removals. A failed addition stops before any
    /// removal is attempted. Halves with nothing to do issue no request.
    pub async fn update_role_privileges(
        &self,
        role_id: &str,
        desired: &PrivilegeSet,
        previous: &PrivilegeSet,
    ) -> Result<ReconciliationPlan> {
        let plan = reconcile(desired, previous);
        debug!(
            "Role {}: {} privilege(s) to add, {} to remove",
            role_id,
            plan.to_add.len(),
            plan.to_remove.len()
        );

        if !plan.to_add.is_empty() {
            self.add_role_privileges(role_id, &plan.to_add)
                .await
                .map_err(|e| IdmcError::Reconciliation {
                    phase: ReconcilePhase::Add,
                    source: Box::new(e),
                })?;
        }

        if !plan.to_remove.is_empty() {
            self.remove_role_privileges(role_id, &plan.to_remove)
                .await
                .map_err(|e| IdmcError::Reconciliation {
                    phase: ReconcilePhase::Remove,
                    source: Box::new(e),
                })?;
        }

        Ok(plan)
    }
}

/// Expect at most one role in a filtered listing
fn single_role(mut roles: Vec<Role>, what: &str) -> Result<Option<Role>> {
    match roles.len() {
        0 => Ok(None),
        1 => Ok(roles.pop()),
        n => Err(IdmcError::MalformedResponse(format!(
            "expected one role with {}, got {}",
            what, n
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idmc::client::test_client;
    use crate::idmc::testing::RecordingTransport;
    use crate::idmc::transport::{build_http_client, HttpSettings};
    use crate::idmc::Session;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn set(items: &[&str]) -> PrivilegeSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn role_json(id: &str, name: &str, privileges: &[&str]) -> serde_json::Value {
        let privileges: Vec<serde_json::Value> = privileges
            .iter()
            .map(|p| serde_json::json!({"id": p, "name": format!("{}.name", p), "status": "Enabled"}))
            .collect();
        serde_json::json!({
            "id": id,
            "roleName": name,
            "systemRole": false,
            "status": "ENABLED",
            "privileges": privileges
        })
    }

    async fn mock_client(server: &MockServer) -> IdmcClient {
        let http = build_http_client(&HttpSettings::default()).unwrap();
        IdmcClient::new(http, Session::new("abc123", format!("{}/saas", server.uri())))
    }

    #[tokio::test]
    async fn test_list_roles_with_filter() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/saas/public/core/v3/roles"))
            .and(query_param("q", "roleName==\"auditor\""))
            .and(query_param("expand", "privileges"))
            .and(header("INFA-SESSION-ID", "abc123"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([role_json("r-1", "auditor", &["p1"])])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server).await;
        let roles = client
            .list_roles(&RoleFilter::Name("auditor".to_string()), true)
            .await
            .unwrap();

        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].name(), "auditor");
        assert_eq!(roles[0].privilege_ids(), set(&["p1"]));
    }

    #[tokio::test]
    async fn test_list_roles_unfiltered_has_no_query() {
        let transport = RecordingTransport::new();
        transport.push_json(StatusCode::OK, serde_json::json!([]));
        let client = test_client(transport.clone());

        let roles = client.list_roles(&RoleFilter::All, false).await.unwrap();

        assert!(roles.is_empty());
        assert_eq!(transport.requests()[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_get_role_by_name_with_quote_sends_nothing() {
        let transport = RecordingTransport::new();
        let client = test_client(transport.clone());

        let result = client.get_role_by_name("auditor\" or roleName==\"admin").await;

        assert!(matches!(result, Err(IdmcError::Config(_))));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_get_role_not_found() {
        let transport = RecordingTransport::new();
        transport.push_json(StatusCode::OK, serde_json::json!([]));
        let client = test_client(transport);

        assert!(client.get_role("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_role_ambiguous() {
        let transport = RecordingTransport::new();
        transport.push_json(
            StatusCode::OK,
            serde_json::json!([role_json("r-1", "a", &[]), role_json("r-2", "a", &[])]),
        );
        let client = test_client(transport);

        let result = client.get_role("r-1").await;
        assert!(matches!(result, Err(IdmcError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_get_role_api_error() {
        let transport = RecordingTransport::new();
        transport.push_json(
            StatusCode::UNAUTHORIZED,
            serde_json::json!({"error": {"code": "AUTH_01", "message": "Invalid session", "requestId": "r"}}),
        );
        let client = test_client(transport);

        let err = client.get_role("r-1").await.unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("Invalid session"));
    }

    #[tokio::test]
    async fn test_create_role() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/saas/public/core/v3/roles"))
            .and(body_json(serde_json::json!({
                "name": "auditor",
                "description": "Read only",
                "privileges": ["p1", "p2"]
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(role_json("r-1", "auditor", &["p1", "p2"])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server).await;
        let role = client
            .create_role("auditor", Some("Read only"), &set(&["p2", "p1"]))
            .await
            .unwrap();

        assert_eq!(role.id, "r-1");
        assert_eq!(role.privilege_ids(), set(&["p1", "p2"]));
    }

    #[tokio::test]
    async fn test_delete_role_accepts_no_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/saas/public/core/v3/roles/r-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server).await;
        client.delete_role("r-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_role_not_found() {
        let transport = RecordingTransport::new();
        transport.push_raw(StatusCode::NOT_FOUND, Vec::new());
        let client = test_client(transport);

        let err = client.delete_role("r-1").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_update_privileges_add_and_remove() {
        let transport = RecordingTransport::new();
        transport.push_raw(StatusCode::OK, Vec::new());
        transport.push_raw(StatusCode::OK, Vec::new());
        let client = test_client(transport.clone());

        let plan = client
            .update_role_privileges("r-1", &set(&["p1", "p2", "p3"]), &set(&["p2", "p4"]))
            .await
            .unwrap();

        assert_eq!(plan.to_add, set(&["p1", "p3"]));
        assert_eq!(plan.to_remove, set(&["p4"]));

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::PUT);
        assert_eq!(
            requests[0].url.path(),
            "/saas/public/core/v3/roles/r-1/addPrivileges"
        );
        assert_eq!(
            requests[0].json(),
            serde_json::json!({"privileges": ["p1", "p3"]})
        );
        assert_eq!(
            requests[1].url.path(),
            "/saas/public/core/v3/roles/r-1/removePrivileges"
        );
        assert_eq!(requests[1].json(), serde_json::json!({"privileges": ["p4"]}));
        assert_eq!(requests[1].headers["INFA-SESSION-ID"], "abc123");
    }

    #[tokio::test]
    async fn test_update_privileges_no_change_sends_nothing() {
        let transport = RecordingTransport::new();
        let client = test_client(transport.clone());

        let plan = client
            .update_role_privileges("r-1", &set(&["p1", "p2"]), &set(&["p1", "p2"]))
            .await
            .unwrap();

        assert!(plan.is_empty());
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_update_privileges_only_additions() {
        let transport = RecordingTransport::new();
        transport.push_raw(StatusCode::OK, Vec::new());
        let client = test_client(transport.clone());

        client
            .update_role_privileges("r-1", &set(&["p1", "p2"]), &set(&["p1"]))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.path().ends_with("/addPrivileges"));
    }

    #[tokio::test]
    async fn test_update_privileges_only_removals() {
        let transport = RecordingTransport::new();
        transport.push_raw(StatusCode::OK, Vec::new());
        let client = test_client(transport.clone());

        client
            .update_role_privileges("r-1", &set(&["p1"]), &set(&["p1", "p2"]))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.path().ends_with("/removePrivileges"));
    }

    #[tokio::test]
    async fn test_update_privileges_add_failure_skips_remove() {
        let transport = RecordingTransport::new();
        transport.push_json(
            StatusCode::BAD_REQUEST,
            serde_json::json!({"error": {"code": "CORE_2", "message": "Unknown privilege", "requestId": "r"}}),
        );
        // Would answer a removal, which must never be sent
        transport.push_raw(StatusCode::OK, Vec::new());
        let client = test_client(transport.clone());

        let err = client
            .update_role_privileges("r-1", &set(&["p1", "p3"]), &set(&["p4"]))
            .await
            .unwrap_err();

        match &err {
            IdmcError::Reconciliation { phase, .. } => assert_eq!(*phase, ReconcilePhase::Add),
            other => panic!("Expected IdmcError::Reconciliation, got {:?}", other),
        }
        assert_eq!(err.status(), Some(400));
        assert_eq!(transport.call_count(), 1);
        assert!(transport.requests()[0].url.path().ends_with("/addPrivileges"));
    }

    #[tokio::test]
    async fn test_update_privileges_remove_failure() {
        let transport = RecordingTransport::new();
        transport.push_raw(StatusCode::OK, Vec::new());
        transport.push_raw(StatusCode::INTERNAL_SERVER_ERROR, Vec::new());
        let client = test_client(transport.clone());

        let err = client
            .update_role_privileges("r-1", &set(&["p1"]), &set(&["p2"]))
            .await
            .unwrap_err();

        match &err {
            IdmcError::Reconciliation { phase, .. } => assert_eq!(*phase, ReconcilePhase::Remove),
            other => panic!("Expected IdmcError::Reconciliation, got {:?}", other),
        }
        assert!(err.to_string().contains("already applied"));
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_role_id_is_path_encoded() {
        let transport = RecordingTransport::new();
        transport.push_raw(StatusCode::OK, Vec::new());
        let client = test_client(transport.clone());

        client.delete_role("a/b").await.unwrap();

        assert_eq!(
            transport.requests()[0].url.path(),
            "/saas/public/core/v3/roles/a%2Fb"
        );
    }
}
