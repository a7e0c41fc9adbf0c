//! Secure Agent installer API operations

use log::debug;
use reqwest::StatusCode;

use crate::config::api;
use crate::error::Result;
use crate::idmc::IdmcClient;

use super::models::{AgentInstallerInfo, Platform};

impl IdmcClient {
    /// Get the installer download URL and a fresh install token
    pub async fn get_agent_installer_info(&self, platform: Platform) -> Result<AgentInstallerInfo> {
        let url = self.url(&format!("{}/{}", api::AGENT_INSTALLER_INFO, platform.as_str()))?;
        debug!("Fetching agent installer info for {}", platform);

        let response = self.get(url).await?;
        self.parse_api_response(
            &response,
            &[StatusCode::OK],
            &format!("fetch agent installer info for '{}'", platform),
        )
    }
}
