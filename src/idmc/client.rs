//! Authenticated IDMC API client

use std::sync::Arc;

use log::debug;
use reqwest::{Method, Request, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::{IdmcError, Result};

use super::credentials::Credentials;
use super::logging::{RequestLogger, ResponseLogger};
use super::models::describe_api_error;
use super::pipeline::{Pipeline, SessionHeaders};
use super::session::{authenticate, Session};
use super::transport::{
    build_http_client, new_request, parse_url, ApiResponse, HttpSettings, Transport,
};

/// IDMC API client
///
/// Holds one session for its whole life and sends every call through a
/// pipeline that stamps the session headers on it.
pub struct IdmcClient {
    pipeline: Pipeline,
    session: Arc<Session>,
    /// Batch mode - disables interactive prompts
    batch_mode: bool,
}

impl IdmcClient {
    /// Create a client for an existing session over any transport
    pub fn new(transport: impl Transport + 'static, session: Session) -> Self {
        let session = Arc::new(session);
        let pipeline = Pipeline::new(transport)
            .with_request_hook(SessionHeaders::new(Arc::clone(&session)))
            .with_request_hook(RequestLogger::new())
            .with_response_hook(ResponseLogger::new());

        Self {
            pipeline,
            session,
            batch_mode: false,
        }
    }

    /// Log in with the given credentials and build a client for the session
    pub async fn connect(settings: &HttpSettings, credentials: &Credentials) -> Result<Self> {
        let http = build_http_client(settings)?;

        // Login carries the password out and the session id back
        let login = Pipeline::new(http.clone())
            .with_request_hook(RequestLogger::without_body())
            .with_response_hook(ResponseLogger::without_body());

        let session = authenticate(
            &login,
            &credentials.host,
            &credentials.username,
            &credentials.password,
        )
        .await?;

        Ok(Self::new(http, session))
    }

    /// The session this client authenticates with
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Set batch mode (disables interactive prompts)
    pub fn set_batch_mode(&mut self, batch: bool) {
        self.batch_mode = batch;
    }

    /// Check if batch mode is enabled
    pub fn is_batch_mode(&self) -> bool {
        self.batch_mode
    }

    /// Build an API URL from a path relative to the session base URL
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        parse_url(&format!(
            "{}/{}",
            self.session.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }

    /// Build an API URL with percent-encoded query parameters
    pub(crate) fn url_with_query(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.url(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Send a request through the client pipeline
    pub(crate) async fn send(&self, request: Request) -> Result<ApiResponse> {
        debug!("{} {}", request.method(), request.url().path());
        self.pipeline.execute(request).await
    }

    /// Send a GET request
    pub(crate) async fn get(&self, url: Url) -> Result<ApiResponse> {
        self.send(new_request(Method::GET, url)).await
    }

    /// Send a DELETE request
    pub(crate) async fn delete(&self, url: Url) -> Result<ApiResponse> {
        self.send(new_request(Method::DELETE, url)).await
    }

    /// Fail with an API error unless the response status is one of `expected`
    ///
    /// `context` completes "Failed to ...", e.g. "fetch roles".
    pub(crate) fn require_status(
        &self,
        response: &ApiResponse,
        expected: &[StatusCode],
        context: &str,
    ) -> Result<()> {
        if expected.contains(&response.status) {
            return Ok(());
        }

        let mut message = format!("Failed to {}: {}", context, response.status_line());
        if let Some(detail) = describe_api_error(&response.body) {
            message.push_str(&format!(" ({})", detail));
        }

        Err(IdmcError::Api {
            status: response.status.as_u16(),
            message,
        })
    }

    /// Check the status, then deserialize the body
    pub(crate) fn parse_api_response<T>(
        &self,
        response: &ApiResponse,
        expected: &[StatusCode],
        context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.require_status(response, expected, context)?;
        response.json().map_err(|e| {
            IdmcError::MalformedResponse(format!(
                "response to '{}' could not be parsed: {}",
                context, e
            ))
        })
    }
}

/// Percent-encode a caller-supplied id for use as a path segment
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Client over a recording fake with a fixed test session
#[cfg(test)]
pub(crate) fn test_client(transport: super::testing::RecordingTransport) -> IdmcClient {
    IdmcClient::new(transport, Session::new("abc123", "https://x.example/saas"))
}
