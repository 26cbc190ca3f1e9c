use super::CoolifyClient;
use crate::errors::ClientError;
use serde_json::Value;

impl CoolifyClient {
    /// Coolify answers `/version` with a bare string, which may or may not be
    /// JSON-quoted depending on the release.
    pub async fn get_version(&self) -> Result<Value, ClientError> {
        self.get_lenient("/version").await
    }

    pub async fn healthcheck(&self) -> Result<Value, ClientError> {
        self.get_lenient("/health").await
    }

    pub async fn list_resources(&self) -> Result<Value, ClientError> {
        self.get("/resources").await
    }

    pub async fn enable_api(&self) -> Result<Value, ClientError> {
        self.get("/enable").await
    }

    pub async fn disable_api(&self) -> Result<Value, ClientError> {
        self.get("/disable").await
    }
}
