//! Trace logging hooks for the request pipeline

use log::{log_enabled, trace, Level};
use reqwest::header::HeaderMap;
use reqwest::Request;

use crate::error::Result;

use super::pipeline::{RequestHook, ResponseHook};
use super::transport::ApiResponse;

const REDACTED: &str = "<redacted>";

/// Logs outgoing requests at trace level
///
/// The body is read through a shared reference, so the request that reaches
/// the transport is unchanged.
pub struct RequestLogger {
    log_body: bool,
}

impl RequestLogger {
    pub fn new() -> Self {
        Self { log_body: true }
    }

    /// Logger that never prints bodies (login carries the password)
    pub fn without_body() -> Self {
        Self { log_body: false }
    }
}

impl Default for RequestLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestHook for RequestLogger {
    fn on_request(&self, request: &mut Request) -> Result<()> {
        if !log_enabled!(Level::Trace) {
            return Ok(());
        }

        let body = if self.log_body {
            request
                .body()
                .and_then(|b| b.as_bytes())
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .unwrap_or_default()
        } else {
            REDACTED.to_string()
        };

        trace!(
            "Sending IDMC HTTP request: {} {} headers=[{}] body={}",
            request.method(),
            request.url(),
            format_headers(request.headers()),
            body
        );
        Ok(())
    }
}

/// Logs incoming responses at trace level
pub struct ResponseLogger {
    log_body: bool,
}

impl ResponseLogger {
    pub fn new() -> Self {
        Self { log_body: true }
    }

    /// Logger that never prints bodies (login returns the session id)
    pub fn without_body() -> Self {
        Self { log_body: false }
    }
}

impl Default for ResponseLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseHook for ResponseLogger {
    fn on_response(&self, response: &ApiResponse) -> Result<()> {
        if !log_enabled!(Level::Trace) {
            return Ok(());
        }

        let body = if self.log_body {
            response.text()
        } else {
            REDACTED.to_string()
        };

        trace!(
            "Receiving IDMC HTTP response: {} from {} headers=[{}] body={}",
            response.status_line(),
            response.url,
            format_headers(&response.headers),
            body
        );
        Ok(())
    }
}

/// Render headers as `name: value` pairs, hiding sensitive values
fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            let shown = if value.is_sensitive() {
                REDACTED
            } else {
                value.to_str().unwrap_or("<binary>")
            };
            format!("{}: {}", name, shown)
        })
        .collect::<Vec<_>>()
        .join(" | ")
}
