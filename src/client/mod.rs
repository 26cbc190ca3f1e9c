//! Authenticated HTTP access to the Coolify REST API.
//!
//! One method per remote endpoint, grouped by resource family in the
//! submodules. Every call funnels through [`CoolifyClient::send`], which owns
//! URL construction, headers, JSON decoding and error translation.

mod applications;
mod databases;
mod deployments;
mod env_vars;
mod github_apps;
mod keys;
mod projects;
mod servers;
mod services;
mod system;
mod teams;

use crate::config::CoolifyConfig;
use crate::constants::api::{PATH_PREFIX, USER_AGENT};
use crate::errors::ClientError;
use crate::services::logger::Logger;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use url::Url;

#[derive(Clone)]
pub struct CoolifyClient {
    config: CoolifyConfig,
    http: Client,
    logger: Logger,
}

/// How a response body that is not JSON should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyMode {
    Json,
    /// Plain-text bodies become a JSON string instead of a decode failure.
    JsonOrText,
}

impl CoolifyClient {
    pub fn new(config: CoolifyConfig, logger: Logger) -> Result<Self, ClientError> {
        Url::parse(config.base_url()).map_err(|source| ClientError::InvalidBaseUrl {
            base_url: config.base_url().to_string(),
            source,
        })?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self {
            config,
            http,
            logger: logger.child("client"),
        })
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.config.base_url(), PATH_PREFIX, path)
    }

    /// Confirms the service is reachable and the token is accepted by
    /// listing servers. Used once at startup.
    pub async fn validate_connection(&self) -> Result<(), ClientError> {
        self.logger.debug("validating connection", None);
        self.list_servers()
            .await
            .map(|_| ())
            .map_err(|err| ClientError::ConnectionValidation(Box::new(err)))
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.send(Method::GET, path, None).await
    }

    pub(crate) async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, ClientError> {
        self.send(Method::POST, path, body).await
    }

    pub(crate) async fn patch(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.send(Method::PATCH, path, Some(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        self.send(Method::DELETE, path, None).await
    }

    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        self.execute(method, path, body, BodyMode::Json).await
    }

    pub(crate) async fn get_lenient(&self, path: &str) -> Result<Value, ClientError> {
        self.execute(Method::GET, path, None, BodyMode::JsonOrText)
            .await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        mode: BodyMode,
    ) -> Result<Value, ClientError> {
        self.logger.debug(
            "request",
            Some(&serde_json::json!({ "method": method.as_str(), "path": path })),
        );

        let mut request = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(self.config.access_token());
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|err| self.map_send_error(err))?;
        let status = response.status();
        let text = response.text().await.map_err(ClientError::Transport)?;

        self.logger.debug(
            "response",
            Some(&serde_json::json!({ "path": path, "status": status.as_u16() })),
        );

        let data = match serde_json::from_str::<Value>(&text) {
            Ok(data) => data,
            Err(_) if mode == BodyMode::JsonOrText && status.is_success() => {
                Value::String(text.trim().to_string())
            }
            Err(source) => {
                return Err(ClientError::Decode {
                    status: status.as_u16(),
                    source,
                })
            }
        };

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(status, &data),
            });
        }
        Ok(data)
    }

    fn map_send_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_builder() {
            return ClientError::Transport(err);
        }
        ClientError::Connection {
            base_url: self.config.base_url().to_string(),
            source: err,
        }
    }
}

/// The body's `message` when the service supplied one, otherwise a
/// synthesized `HTTP <status>: <reason>`.
fn error_message(status: StatusCode, data: &Value) -> String {
    data.get("message")
        .and_then(|v| v.as_str())
        .filter(|m| !m.is_empty())
        .map(|m| m.to_string())
        .unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )
        })
}

/// Encodes an identifier as a single path segment.
pub(crate) fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Appends `pairs` as a query string; no `?` when there is nothing to add.
pub(crate) fn with_query(path: String, pairs: &[(&'static str, String)]) -> String {
    if pairs.is_empty() {
        return path;
    }
    match serde_urlencoded::to_string(pairs) {
        Ok(query) => format!("{}?{}", path, query),
        Err(_) => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::logger::LogLevel;
    use serde_json::json;

    #[test]
    fn segment_encodes_separators() {
        assert_eq!(segment("abc"), "abc");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
        assert_eq!(segment("prod?x=1"), "prod%3Fx%3D1");
    }

    #[test]
    fn query_is_omitted_when_empty() {
        assert_eq!(with_query("/deploy".to_string(), &[]), "/deploy");
        assert_eq!(
            with_query(
                "/deploy".to_string(),
                &[("tag", "a,b".to_string()), ("force", "true".to_string())]
            ),
            "/deploy?tag=a%2Cb&force=true"
        );
    }

    #[test]
    fn error_message_prefers_the_body() {
        let body = json!({ "error": "x", "status": 404, "message": "Not found" });
        assert_eq!(error_message(StatusCode::NOT_FOUND, &body), "Not found");
    }

    #[test]
    fn error_message_is_synthesized_without_a_body_message() {
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, &json!({})),
            "HTTP 500: Internal Server Error"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, &json!({ "message": "" })),
            "HTTP 502: Bad Gateway"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected_before_any_request() {
        let config = CoolifyConfig::new("not a url", "token").expect("config");
        let logger = Logger::with_level("test", LogLevel::Error);
        let err = CoolifyClient::new(config, logger).err().expect("must fail");
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
    }
}
