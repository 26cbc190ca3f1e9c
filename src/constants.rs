pub mod api {
    pub const PATH_PREFIX: &str = "/api/v1";
    pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
    pub const USER_AGENT: &str = concat!("coolify-mcp/", env!("CARGO_PKG_VERSION"));
}

pub mod server {
    pub const NAME: &str = "coolify-mcp";
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PROTOCOL_VERSION: &str = "2025-06-18";
}

pub mod limits {
    /// Upper bound, in characters, for any string handed back through a sanitized tool.
    pub const SANITIZED_STRING_MAX_CHARS: usize = 4096;
    pub const SCHEMA_ERRORS_SHOWN: usize = 10;
    pub const SUGGESTIONS_SHOWN: usize = 3;
}

pub mod policy {
    pub const CONFIRM_FIELD: &str = "confirm";
    pub const CONFIRM_DESCRIPTION: &str =
        "Must be set to true to confirm this destructive operation";
    pub const COMMAND_REJECTED: &str = "Command contains unsupported characters";
}
