//! Request pipeline: ordered hooks around a transport
//!
//! Every request passes through the request hooks in registration order,
//! then the wrapped transport, then the response hooks. The first failing hook
//! ends the call with its error.

use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Request;

use crate::config::{api, headers};
use crate::error::{IdmcError, Result};

use super::session::Session;
use super::transport::{ApiResponse, Transport};

/// REST surface a request targets, resolved from its URL path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V2,
    V3,
}

impl ApiVersion {
    /// Detect the version marker in a URL path (`/v2/` or `/v3/`)
    pub fn from_path(path: &str) -> Option<Self> {
        if path.contains(api::V2_MARKER) {
            Some(ApiVersion::V2)
        } else if path.contains(api::V3_MARKER) {
            Some(ApiVersion::V3)
        } else {
            None
        }
    }

    /// Header carrying the session id
    pub fn session_header(self) -> &'static str {
        match self {
            ApiVersion::V2 => headers::V2_SESSION,
            ApiVersion::V3 => headers::V3_SESSION,
        }
    }

    /// Header carrying the product base URL
    pub fn base_url_header(self) -> &'static str {
        match self {
            ApiVersion::V2 => headers::V2_BASE_URL,
            ApiVersion::V3 => headers::V3_BASE_URL,
        }
    }
}

/// Hook run on each request before it is sent
pub trait RequestHook: Send + Sync {
    fn on_request(&self, request: &mut Request) -> Result<()>;
}

impl<F> RequestHook for F
where
    F: Fn(&mut Request) -> Result<()> + Send + Sync,
{
    fn on_request(&self, request: &mut Request) -> Result<()> {
        self(request)
    }
}

/// Hook run on each response after it is received
pub trait ResponseHook: Send + Sync {
    fn on_response(&self, response: &ApiResponse) -> Result<()>;
}

impl<F> ResponseHook for F
where
    F: Fn(&ApiResponse) -> Result<()> + Send + Sync,
{
    fn on_response(&self, response: &ApiResponse) -> Result<()> {
        self(response)
    }
}

/// A transport decorated with request and response hooks
///
/// Immutable once built; clones share the same transport and hooks.
#[derive(Clone)]
pub struct Pipeline {
    transport: Arc<dyn Transport>,
    request_hooks: Vec<Arc<dyn RequestHook>>,
    response_hooks: Vec<Arc<dyn ResponseHook>>,
}

impl Pipeline {
    /// Wrap a transport with no hooks
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            request_hooks: Vec::new(),
            response_hooks: Vec::new(),
        }
    }

    /// Append a request hook
    pub fn with_request_hook(mut self, hook: impl RequestHook + 'static) -> Self {
        self.request_hooks.push(Arc::new(hook));
        self
    }

    /// Append a response hook
    pub fn with_response_hook(mut self, hook: impl ResponseHook + 'static) -> Self {
        self.response_hooks.push(Arc::new(hook));
        self
    }

    /// Run the hooks and the wrapped transport for one request
    pub async fn execute(&self, mut request: Request) -> Result<ApiResponse> {
        for hook in &self.request_hooks {
            hook.on_request(&mut request)?;
        }

        let response = self.transport.send(request).await?;

        for hook in &self.response_hooks {
            hook.on_response(&response)?;
        }

        Ok(response)
    }
}

impl Transport for Pipeline {
    fn send(&self, request: Request) -> BoxFuture<'_, Result<ApiResponse>> {
        Box::pin(self.execute(request))
    }
}

/// Injects the session headers matching the request's API version
///
/// Requests whose path carries no version marker go out untouched.
pub struct SessionHeaders {
    session: Arc<Session>,
}

impl SessionHeaders {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}

impl RequestHook for SessionHeaders {
    fn on_request(&self, request: &mut Request) -> Result<()> {
        let Some(version) = ApiVersion::from_path(request.url().path()) else {
            return Ok(());
        };

        let mut session_value = HeaderValue::from_str(&self.session.session_id)?;
        session_value.set_sensitive(true);
        let base_url_value = HeaderValue::from_str(&self.session.base_url)?;

        let headers = request.headers_mut();
        headers.insert(header_name(version.session_header())?, session_value);
        headers.insert(header_name(version.base_url_header())?, base_url_value);
        Ok(())
    }
}

fn header_name(name: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| IdmcError::Config(format!("invalid header name '{}': {}", name, e)))
}
