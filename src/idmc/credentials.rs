//! Login credential resolution from multiple sources

use std::fmt;

use log::debug;

use crate::config::credentials;
use crate::error::{IdmcError, Result};

/// Login host and user credentials for one configuration
#[derive(Clone)]
pub struct Credentials {
    pub host: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credential resolution with fallback logic
///
/// Each value comes from the CLI argument if given, otherwise from its
/// environment variable. Everything that is missing is reported at once.
pub struct CredentialResolver<'a> {
    host: Option<&'a str>,
    username: Option<&'a str>,
    password: Option<&'a str>,
}

impl<'a> CredentialResolver<'a> {
    /// Create a resolver from CLI arguments
    pub fn new(host: Option<&'a str>, username: Option<&'a str>, password: Option<&'a str>) -> Self {
        Self {
            host,
            username,
            password,
        }
    }

    /// Resolve from CLI arguments, then the process environment
    pub fn resolve(&self) -> Result<Credentials> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    fn resolve_with<F>(&self, env: F) -> Result<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();

        let host = Self::pick("host", self.host, credentials::HOST_ENV_VAR, &env);
        let username = Self::pick("username", self.username, credentials::USER_ENV_VAR, &env);
        let password = Self::pick("password", self.password, credentials::PASS_ENV_VAR, &env);

        if host.is_none() {
            missing.push(("login host", "--host", credentials::HOST_ENV_VAR));
        }
        if username.is_none() {
            missing.push(("username", "--username", credentials::USER_ENV_VAR));
        }
        if password.is_none() {
            missing.push(("password", "--password", credentials::PASS_ENV_VAR));
        }

        match (host, username, password) {
            (Some(host), Some(username), Some(password)) => Ok(Credentials {
                host,
                username,
                password,
            }),
            _ => Err(IdmcError::CredentialsNotFound(Self::not_found_message(
                &missing,
            ))),
        }
    }

    fn pick<F>(label: &str, cli: Option<&str>, env_var: &str, env: &F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = cli.filter(|v| !v.is_empty()) {
            debug!("Using {} from CLI argument", label);
            return Some(value.to_string());
        }
        match env(env_var).filter(|v| !v.is_empty()) {
            Some(value) => {
                debug!("Using {} from {} environment variable", label, env_var);
                Some(value)
            }
            None => None,
        }
    }

    /// Generate helpful error message listing every missing value
    fn not_found_message(missing: &[(&str, &str, &str)]) -> String {
        let mut msg = String::from("Missing IDMC login configuration:\n");
        for (what, flag, env_var) in missing {
            msg.push_str(&format!(
                "\n  - {}: use {} or set {}",
                what, flag, env_var
            ));
        }
        msg
    }
}
