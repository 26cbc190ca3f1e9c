use super::{segment, with_query, CoolifyClient};
use crate::errors::ClientError;
use crate::types::DeployOptions;
use serde_json::Value;

impl CoolifyClient {
    pub async fn list_deployments(&self) -> Result<Value, ClientError> {
        self.get("/deployments").await
    }

    pub async fn get_deployment(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/deployments/{}", segment(uuid))).await
    }

    pub async fn get_deployments_by_application(
        &self,
        app_uuid: &str,
    ) -> Result<Value, ClientError> {
        self.get(&format!("/deployments/applications/{}", segment(app_uuid)))
            .await
    }

    pub async fn cancel_deployment(&self, uuid: &str) -> Result<Value, ClientError> {
        self.post(&format!("/deployments/{}/cancel", segment(uuid)), None)
            .await
    }

    /// Deploys every resource matching the tag and/or UUID lists.
    pub async fn deploy(&self, options: &DeployOptions) -> Result<Value, ClientError> {
        let path = with_query("/deploy".to_string(), &options.query_pairs());
        self.get(&path).await
    }
}
