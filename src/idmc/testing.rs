//! In-process fake transport for unit tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, StatusCode, Url};

use crate::error::{IdmcError, Result};

use super::transport::{ApiResponse, Transport};

/// A request as seen by the transport, after all hooks ran
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        self.body
            .as_deref()
            .map(|b| serde_json::from_slice(b).unwrap())
            .unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Default)]
struct State {
    requests: Vec<RecordedRequest>,
    responses: VecDeque<(StatusCode, Vec<u8>)>,
}

/// Records every request and answers from a queue of canned responses
///
/// Clones share state, so a test can keep one handle while the pipeline owns
/// another.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    state: Arc<Mutex<State>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: StatusCode, body: serde_json::Value) {
        self.push_raw(status, serde_json::to_vec(&body).unwrap());
    }

    pub fn push_raw(&self, status: StatusCode, body: Vec<u8>) {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back((status, body));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: Request) -> BoxFuture<'_, Result<ApiResponse>> {
        let recorded = RecordedRequest {
            method: request.method().clone(),
            url: request.url().clone(),
            headers: request.headers().clone(),
            body: request.body().and_then(|b| b.as_bytes()).map(<[u8]>::to_vec),
        };

        let mut state = self.state.lock().unwrap();
        state.requests.push(recorded);
        let next = state.responses.pop_front();
        drop(state);

        let url = request.url().clone();
        Box::pin(async move {
            let (status, body) = next.ok_or_else(|| {
                IdmcError::Config(format!("no canned response queued for {}", url))
            })?;
            Ok(ApiResponse {
                status,
                url,
                headers: HeaderMap::new(),
                body,
            })
        })
    }
}
