//! Error documents shared by the v2 and v3 REST surfaces

use serde::Deserialize;

/// v2 error body: `{"@type": "error", "code", "description", "statusCode"}`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorV2 {
    #[serde(rename = "@type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub status_code: Option<u16>,
}

/// v3 error body: `{"error": {"code", "message", "requestId"}}`
#[derive(Deserialize, Debug)]
pub struct ApiErrorV3 {
    pub error: ApiErrorV3Detail,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorV3Detail {
    pub code: Option<String>,
    pub message: Option<String>,
    pub request_id: Option<String>,
}

/// Summarize a vendor error document, if the body is one
pub fn describe_api_error(body: &[u8]) -> Option<String> {
    if let Ok(v3) = serde_json::from_slice::<ApiErrorV3>(body) {
        let detail = v3.error;
        return Some(format!(
            "request: {}, code: {}, message: {}",
            detail.request_id.as_deref().unwrap_or("-"),
            detail.code.as_deref().unwrap_or("-"),
            detail.message.as_deref().unwrap_or("-"),
        ));
    }

    if let Ok(v2) = serde_json::from_slice::<ApiErrorV2>(body) {
        if v2.error_type.as_deref() == Some("error") || v2.code.is_some() {
            return Some(format!(
                "code: {}, message: {}",
                v2.code.as_deref().unwrap_or("-"),
                v2.description.as_deref().unwrap_or("-"),
            ));
        }
    }

    None
}
