//! Privilege API operations

use log::debug;
use reqwest::StatusCode;

use crate::config::api;
use crate::error::Result;
use crate::idmc::IdmcClient;

use super::models::{Privilege, PrivilegeStatus};

impl IdmcClient {
    /// List privileges, optionally only those with the given status
    pub async fn list_privileges(&self, status: Option<PrivilegeStatus>) -> Result<Vec<Privilege>> {
        let q = status.map(|s| format!("status==\"{}\"", s.as_api_str()));
        let query: Vec<(&str, &str)> = q.as_deref().map(|q| ("q", q)).into_iter().collect();

        let url = self.url_with_query(api::PRIVILEGES, &query)?;
        debug!("Fetching privileges: {}", url);

        let response = self.get(url).await?;
        self.parse_api_response(&response, &[StatusCode::OK], "fetch privileges")
    }
}
