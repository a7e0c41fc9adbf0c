/// Configuration constants for the IDMC REST API
pub mod api {
    /// Login endpoint, relative to the login host
    pub const LOGIN_PATH: &str = "public/core/v3/login";

    /// Product whose base URL serves the administration API
    pub const TARGET_PRODUCT: &str = "Integration Cloud";

    /// Roles endpoint (v3)
    pub const ROLES: &str = "public/core/v3/roles";

    /// Privileges endpoint (v3)
    pub const PRIVILEGES: &str = "public/core/v3/privileges";

    /// Runtime environments endpoint (v2)
    pub const RUNTIME_ENVIRONMENTS: &str = "api/v2/runtimeEnvironment";

    /// Secure Agent installer info endpoint (v2)
    pub const AGENT_INSTALLER_INFO: &str = "api/v2/agent/installerInfo";

    /// Path marker of the v2 REST surface
    pub const V2_MARKER: &str = "/v2/";

    /// Path marker of the v3 REST surface
    pub const V3_MARKER: &str = "/v3/";
}

/// Session header names per API version
pub mod headers {
    /// v2 session id header
    pub const V2_SESSION: &str = "icSessionId";

    /// v2 base URL header
    pub const V2_BASE_URL: &str = "serverUrl";

    /// v3 session id header
    pub const V3_SESSION: &str = "INFA-SESSION-ID";

    /// v3 base URL header
    pub const V3_BASE_URL: &str = "baseApiUrl";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable for the login host
    pub const HOST_ENV_VAR: &str = "IDMC_AUTH_HOST";

    /// Environment variable for the username
    pub const USER_ENV_VAR: &str = "IDMC_AUTH_USER";

    /// Environment variable for the password
    pub const PASS_ENV_VAR: &str = "IDMC_AUTH_PASS";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// TCP connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Whole-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}
