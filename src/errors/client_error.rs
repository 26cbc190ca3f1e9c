use thiserror::Error;

/// Failures raised by [`crate::client::CoolifyClient`].
///
/// Connectivity problems, API-level rejections and undecodable bodies are
/// separate variants so callers can tell "the server is down" apart from
/// "the server said no".
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Coolify base URL is required")]
    MissingBaseUrl,

    #[error("Coolify access token is required")]
    MissingAccessToken,

    #[error("Invalid Coolify base URL '{base_url}': {source}")]
    InvalidBaseUrl {
        base_url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(
        "Failed to connect to Coolify server at {base_url}. Please check if the server is running and the URL is correct."
    )]
    Connection {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode Coolify response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to connect to Coolify server: {0}")]
    ConnectionValidation(Box<ClientError>),

    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } | ClientError::Decode { status, .. } => Some(*status),
            ClientError::ConnectionValidation(inner) => inner.status(),
            _ => None,
        }
    }

    pub fn is_connection(&self) -> bool {
        match self {
            ClientError::Connection { .. } => true,
            ClientError::ConnectionValidation(inner) => inner.is_connection(),
            _ => false,
        }
    }
}
