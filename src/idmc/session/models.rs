//! Login and session data models

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::error::{IdmcError, Result};

/// Authenticated context for all calls of one configuration
///
/// Built once by login and never refreshed.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    pub base_url: String,
    pub org_id: Option<String>,
    pub org_name: Option<String>,
    pub user_name: Option<String>,
}

impl Session {
    /// Session with only the fields the API needs
    pub fn new(session_id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            base_url: base_url.into(),
            org_id: None,
            org_name: None,
            user_name: None,
        }
    }

    /// Extract the session from a login response body
    ///
    /// Requires a non-empty `userInfo.sessionId` and a product named
    /// "Integration Cloud" with a non-empty `baseApiUrl`.
    pub fn from_login(login: LoginResponse) -> Result<Self> {
        let user_info = login.user_info.ok_or_else(|| {
            IdmcError::MalformedResponse("login response has no 'userInfo'".to_string())
        })?;

        let session_id = user_info
            .session_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                IdmcError::MalformedResponse(
                    "login response has no 'userInfo.sessionId'".to_string(),
                )
            })?;

        let products = login.products.unwrap_or_default();
        let base_url = products
            .iter()
            .find(|p| p.name.as_deref() == Some(api::TARGET_PRODUCT))
            .and_then(|p| p.base_api_url.clone())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                let seen: Vec<&str> = products
                    .iter()
                    .map(|p| p.name.as_deref().unwrap_or("<unnamed>"))
                    .collect();
                IdmcError::MalformedResponse(format!(
                    "no base API URL for product '{}' in login response (products: [{}])",
                    api::TARGET_PRODUCT,
                    seen.join(", ")
                ))
            })?;

        Ok(Self {
            session_id,
            base_url,
            org_id: user_info.org_id,
            org_name: user_info.org_name,
            user_name: user_info.name,
        })
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("session_id", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("org_id", &self.org_id)
            .field("org_name", &self.org_name)
            .field("user_name", &self.user_name)
            .finish()
    }
}

/// Login request body
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Login response body
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub products: Option<Vec<Product>>,
    pub user_info: Option<UserInfo>,
}

/// A product the user can access, with its API base URL
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: Option<String>,
    pub base_api_url: Option<String>,
}

/// User details returned by login
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub session_id: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub parent_org_id: Option<String>,
    pub org_id: Option<String>,
    pub org_name: Option<String>,
    #[serde(default)]
    pub groups: HashMap<String, String>,
    pub status: Option<String>,
}
