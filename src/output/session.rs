//! Session output formatter

use serde::Serialize;

use super::common::{detail_table, or_dash, print_json};
use crate::cli::OutputFormat;
use crate::idmc::Session;

/// Serializable session summary; the session id is never included
#[derive(Serialize)]
struct SerializableSession<'a> {
    base_api_url: &'a str,
    org_id: Option<&'a str>,
    org_name: Option<&'a str>,
    user_name: Option<&'a str>,
}

impl<'a> From<&'a Session> for SerializableSession<'a> {
    fn from(session: &'a Session) -> Self {
        Self {
            base_api_url: &session.base_url,
            org_id: session.org_id.as_deref(),
            org_name: session.org_name.as_deref(),
            user_name: session.user_name.as_deref(),
        }
    }
}

/// Output the details of a logged-in session
pub fn output_session(session: &Session, format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            let table = detail_table(&[
                ("User", or_dash(session.user_name.as_deref())),
                ("Organization", or_dash(session.org_name.as_deref())),
                ("Organization ID", or_dash(session.org_id.as_deref())),
                ("Base API URL", session.base_url.clone()),
            ]);
            println!("{table}");
        }
        OutputFormat::Json => print_json(&SerializableSession::from(session)),
    }
}
