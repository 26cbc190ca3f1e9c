use super::{segment, CoolifyClient};
use crate::errors::ClientError;
use crate::types::Payload;
use serde_json::Value;

impl CoolifyClient {
    pub async fn list_github_apps(&self) -> Result<Value, ClientError> {
        self.get("/github-apps").await
    }

    pub async fn create_github_app(&self, data: Payload) -> Result<Value, ClientError> {
        self.post("/github-apps", Some(Value::Object(data))).await
    }

    pub async fn update_github_app(&self, id: u64, data: Payload) -> Result<Value, ClientError> {
        self.patch(&format!("/github-apps/{}", id), Value::Object(data))
            .await
    }

    pub async fn delete_github_app(&self, id: u64) -> Result<Value, ClientError> {
        self.delete(&format!("/github-apps/{}", id)).await
    }

    pub async fn list_github_app_repositories(&self, id: u64) -> Result<Value, ClientError> {
        self.get(&format!("/github-apps/{}/repositories", id)).await
    }

    pub async fn list_github_app_branches(
        &self,
        id: u64,
        owner: &str,
        repo: &str,
    ) -> Result<Value, ClientError> {
        self.get(&format!(
            "/github-apps/{}/repositories/{}/{}/branches",
            id,
            segment(owner),
            segment(repo)
        ))
        .await
    }
}
