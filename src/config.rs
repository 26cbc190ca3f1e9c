use crate::errors::ClientError;
use serde::Serialize;

/// Connection settings for the Coolify API. Built once at startup.
#[derive(Clone, Serialize)]
pub struct CoolifyConfig {
    base_url: String,
    #[serde(skip)]
    access_token: String,
}

impl CoolifyConfig {
    /// Validates both fields and strips a single trailing `/` from the base URL.
    /// Only one separator is removed: `https://host//` keeps one.
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        let access_token = access_token.into();
        if base_url.is_empty() {
            return Err(ClientError::MissingBaseUrl);
        }
        if access_token.is_empty() {
            return Err(ClientError::MissingAccessToken);
        }
        let base_url = match base_url.strip_suffix('/') {
            Some(stripped) => stripped.to_string(),
            None => base_url,
        };
        Ok(Self {
            base_url,
            access_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl std::fmt::Debug for CoolifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoolifyConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}
