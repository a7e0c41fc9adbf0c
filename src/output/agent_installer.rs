//! Agent installer output formatter

use serde::Serialize;

use super::common::{detail_table, or_dash, print_json};
use crate::cli::OutputFormat;
use crate::idmc::{AgentInstallerInfo, Platform};

#[derive(Serialize)]
struct SerializableInstallerInfo<'a> {
    platform: &'a str,
    download_url: &'a str,
    install_token: &'a str,
    checksum_download_url: Option<&'a str>,
}

/// Output Secure Agent installer details
pub fn output_agent_installer_info(
    platform: Platform,
    info: &AgentInstallerInfo,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Table => {
            let table = detail_table(&[
                ("Platform", platform.to_string()),
                ("Download URL", info.download_url.clone()),
                ("Checksum URL", or_dash(info.checksum_download_url.as_deref())),
                ("Install token", info.install_token.clone()),
            ]);
            println!("{table}");
        }
        OutputFormat::Json => print_json(&SerializableInstallerInfo {
            platform: platform.as_str(),
            download_url: &info.download_url,
            install_token: &info.install_token,
            checksum_download_url: info.checksum_download_url.as_deref(),
        }),
    }
}
