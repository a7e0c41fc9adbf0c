//! HTTP transport abstraction and request construction

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Request, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::defaults;
use crate::error::{IdmcError, Result};

const APPLICATION_JSON: &str = "application/json";

/// A fully buffered HTTP response
///
/// The body is read exactly once, when the response comes off the wire, so
/// hooks and deserialization can all look at the same bytes.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Drain a reqwest response into a buffered one
    pub async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let url = response.url().clone();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(Self {
            status,
            url,
            headers,
            body,
        })
    }

    /// Status code plus canonical reason, e.g. "403 Forbidden"
    pub fn status_line(&self) -> String {
        match self.status.canonical_reason() {
            Some(reason) => format!("{} {}", self.status.as_u16(), reason),
            None => self.status.as_u16().to_string(),
        }
    }

    /// Deserialize the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Body as (lossy) UTF-8 text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Something that can carry a request to the API and bring back a response
///
/// Implemented by `reqwest::Client` for real traffic and by
/// [`Pipeline`](super::Pipeline), so decorated transports compose.
pub trait Transport: Send + Sync {
    fn send(&self, request: Request) -> BoxFuture<'_, Result<ApiResponse>>;
}

impl Transport for Client {
    fn send(&self, request: Request) -> BoxFuture<'_, Result<ApiResponse>> {
        Box::pin(async move {
            let response = self.execute(request).await?;
            ApiResponse::read(response).await
        })
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: Request) -> BoxFuture<'_, Result<ApiResponse>> {
        (**self).send(request)
    }
}

/// Timeouts applied to every outbound call
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
        }
    }
}

impl HttpSettings {
    /// Settings with a custom whole-request timeout
    pub fn with_request_timeout(secs: u64) -> Self {
        Self {
            request_timeout: Duration::from_secs(secs),
            ..Self::default()
        }
    }
}

/// Build the HTTP client shared by the login call and the API client
pub fn build_http_client(settings: &HttpSettings) -> Result<Client> {
    let client = Client::builder()
        // Connection pool settings - reuse connections
        .pool_max_idle_per_host(20)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .build()?;
    Ok(client)
}

/// Parse an absolute URL, reporting failures as configuration errors
pub fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| IdmcError::Config(format!("invalid URL '{}': {}", raw, e)))
}

/// Create a bodiless request that accepts JSON
pub fn new_request(method: Method, url: Url) -> Request {
    let mut request = Request::new(method, url);
    request
        .headers_mut()
        .insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    request
}

/// Create a request carrying `body` serialized as JSON
pub fn new_json_request<B: Serialize + ?Sized>(
    method: Method,
    url: Url,
    body: &B,
) -> Result<Request> {
    let payload = serde_json::to_vec(body)?;
    let mut request = new_request(method, url);
    request
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    *request.body_mut() = Some(payload.into());
    Ok(request)
}
