use crate::errors::ClientError;
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorKind {
    InvalidParams,
    Denied,
    NotFound,
    Conflict,
    Unavailable,
    Internal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            hint: None,
            details: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::InvalidParams, "INVALID_PARAMS", message)
    }

    pub fn denied(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Denied, "DENIED", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::NotFound, "NOT_FOUND", message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Conflict, "CONFLICT", message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Unavailable, "UNAVAILABLE", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Internal, "INTERNAL", message)
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ToolError {}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        ToolError::internal(err.to_string())
    }
}

impl From<ClientError> for ToolError {
    fn from(err: ClientError) -> Self {
        let message = err.to_string();
        match &err {
            ClientError::MissingBaseUrl
            | ClientError::MissingAccessToken
            | ClientError::InvalidBaseUrl { .. } => {
                ToolError::new(ToolErrorKind::Internal, "CONFIG_INVALID", message)
            }
            ClientError::Connection { base_url, .. } => {
                ToolError::new(ToolErrorKind::Unavailable, "CONNECTION_FAILED", message)
                    .with_details(serde_json::json!({ "base_url": base_url }))
            }
            ClientError::ConnectionValidation(_) => {
                ToolError::new(ToolErrorKind::Unavailable, "CONNECTION_FAILED", message)
            }
            ClientError::Api { status, .. } => {
                let kind = match status {
                    401 | 403 => ToolErrorKind::Denied,
                    404 => ToolErrorKind::NotFound,
                    409 => ToolErrorKind::Conflict,
                    400 | 422 => ToolErrorKind::InvalidParams,
                    _ => ToolErrorKind::Internal,
                };
                ToolError::new(kind, "API_ERROR", message)
                    .with_details(serde_json::json!({ "status": status }))
            }
            ClientError::Decode { status, .. } => {
                ToolError::new(ToolErrorKind::Internal, "MALFORMED_RESPONSE", message)
                    .with_details(serde_json::json!({ "status": status }))
            }
            ClientError::Transport(_) => {
                ToolError::new(ToolErrorKind::Unavailable, "TRANSPORT_ERROR", message)
            }
        }
    }
}
