//! Login handshake

use log::debug;
use reqwest::{Method, StatusCode, Url};

use crate::config::api;
use crate::error::{IdmcError, Result};
use crate::idmc::transport::{new_json_request, parse_url, Transport};

use super::models::{LoginRequest, LoginResponse, Session};

/// Build the login endpoint URL for a host
///
/// A bare host gets `https://`. A host that already names its scheme
/// (`http://` or `https://`) keeps it.
pub fn login_url(host: &str) -> Result<Url> {
    let host = host.trim().trim_end_matches('/');
    if host.is_empty() {
        return Err(IdmcError::Config("login host is empty".to_string()));
    }

    let origin = if host.starts_with("https://") || host.starts_with("http://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    };

    parse_url(&format!("{}/{}", origin, api::LOGIN_PATH))
}

/// Exchange credentials for a session
///
/// Sends exactly one request. Any status other than 200 fails without looking
/// at the body; a body without a session id or an "Integration Cloud" base
/// URL fails as a malformed response.
pub async fn authenticate<T>(
    transport: &T,
    host: &str,
    username: &str,
    password: &str,
) -> Result<Session>
where
    T: Transport + ?Sized,
{
    let url = login_url(host)?;
    debug!("Logging in as '{}' at {}", username, url);

    let request = new_json_request(Method::POST, url, &LoginRequest { username, password })?;
    let response = transport.send(request).await?;

    if response.status != StatusCode::OK {
        return Err(IdmcError::Api {
            status: response.status.as_u16(),
            message: format!("Login failed: {}", response.status_line()),
        });
    }

    let login: LoginResponse = response.json().map_err(|e| {
        IdmcError::MalformedResponse(format!("login response could not be parsed: {}", e))
    })?;

    let session = Session::from_login(login)?;
    debug!(
        "Logged in to org {:?}, API base URL: {}",
        session.org_name, session.base_url
    );
    Ok(session)
}
