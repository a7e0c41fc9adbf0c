//! Secure Agent installer data models

use clap::ValueEnum;
use serde::Deserialize;

/// Platform of the Secure Agent machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Platform {
    /// 64-bit Windows
    Win64,
    /// 64-bit Linux
    Linux64,
}

impl Platform {
    /// Path segment the API expects
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Win64 => "win64",
            Platform::Linux64 => "linux64",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Download details for a Secure Agent installer
///
/// Older pods answer with snake_case keys, newer ones with camelCase.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AgentInstallerInfo {
    #[serde(alias = "download_url")]
    pub download_url: String,
    #[serde(alias = "install_token")]
    pub install_token: String,
    #[serde(default, alias = "checksum_download_url")]
    pub checksum_download_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_strings() {
        assert_eq!(Platform::Win64.as_str(), "win64");
        assert_eq!(Platform::Linux64.to_string(), "linux64");
    }

    #[test]
    fn test_installer_info_camel_case() {
        let info: AgentInstallerInfo = serde_json::from_value(serde_json::json!({
            "@type": "agentInstallerInfo",
            "downloadUrl": "https://x.example/agent64_install_ng_ext.bin",
            "installToken": "token-1",
            "checksumDownloadUrl": "https://x.example/agent64_install_ng_ext.bin.sha256"
        }))
        .unwrap();

        assert_eq!(info.download_url, "https://x.example/agent64_install_ng_ext.bin");
        assert_eq!(info.install_token, "token-1");
        assert!(info.checksum_download_url.is_some());
    }

    #[test]
    fn test_installer_info_snake_case() {
        let info: AgentInstallerInfo = serde_json::from_value(serde_json::json!({
            "@type": "agentInstallerInfo",
            "download_url": "https://x.example/agent.exe",
            "install_token": "token-2"
        }))
        .unwrap();

        assert_eq!(info.download_url, "https://x.example/agent.exe");
        assert_eq!(info.install_token, "token-2");
        assert!(info.checksum_download_url.is_none());
    }
}
