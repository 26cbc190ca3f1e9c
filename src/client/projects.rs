use super::{segment, CoolifyClient};
use crate::errors::ClientError;
use crate::types::Payload;
use serde_json::Value;

impl CoolifyClient {
    pub async fn list_projects(&self) -> Result<Value, ClientError> {
        self.get("/projects").await
    }

    pub async fn get_project(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/projects/{}", segment(uuid))).await
    }

    pub async fn create_project(&self, data: Payload) -> Result<Value, ClientError> {
        self.post("/projects", Some(Value::Object(data))).await
    }

    pub async fn update_project(&self, uuid: &str, data: Payload) -> Result<Value, ClientError> {
        self.patch(&format!("/projects/{}", segment(uuid)), Value::Object(data))
            .await
    }

    pub async fn delete_project(&self, uuid: &str) -> Result<Value, ClientError> {
        self.delete(&format!("/projects/{}", segment(uuid))).await
    }

    /// `environment` may be either the environment's name or its UUID.
    pub async fn get_project_environment(
        &self,
        project_uuid: &str,
        environment: &str,
    ) -> Result<Value, ClientError> {
        self.get(&format!(
            "/projects/{}/{}",
            segment(project_uuid),
            segment(environment)
        ))
        .await
    }

    pub async fn list_project_environments(&self, project_uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/projects/{}/environments", segment(project_uuid)))
            .await
    }

    pub async fn create_project_environment(
        &self,
        project_uuid: &str,
        data: Payload,
    ) -> Result<Value, ClientError> {
        self.post(
            &format!("/projects/{}/environments", segment(project_uuid)),
            Some(Value::Object(data)),
        )
        .await
    }

    pub async fn delete_project_environment(
        &self,
        project_uuid: &str,
        environment: &str,
    ) -> Result<Value, ClientError> {
        self.delete(&format!(
            "/projects/{}/environments/{}",
            segment(project_uuid),
            segment(environment)
        ))
        .await
    }
}
