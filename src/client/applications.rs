use super::{segment, with_query, CoolifyClient};
use crate::errors::ClientError;
use crate::types::{ApplicationSource, DeleteOptions, Payload, StartOptions};
use serde_json::{json, Value};

impl CoolifyClient {
    pub async fn list_applications(&self) -> Result<Value, ClientError> {
        self.get("/applications").await
    }

    pub async fn get_application(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/applications/{}", segment(uuid))).await
    }

    pub async fn create_application(
        &self,
        source: ApplicationSource,
        data: Payload,
    ) -> Result<Value, ClientError> {
        self.post(source.endpoint(), Some(Value::Object(data))).await
    }

    pub async fn update_application(
        &self,
        uuid: &str,
        data: Payload,
    ) -> Result<Value, ClientError> {
        self.patch(
            &format!("/applications/{}", segment(uuid)),
            Value::Object(data),
        )
        .await
    }

    pub async fn delete_application(
        &self,
        uuid: &str,
        options: &DeleteOptions,
    ) -> Result<Value, ClientError> {
        let path = with_query(
            format!("/applications/{}", segment(uuid)),
            &options.query_pairs(),
        );
        self.delete(&path).await
    }

    pub async fn start_application(
        &self,
        uuid: &str,
        options: &StartOptions,
    ) -> Result<Value, ClientError> {
        let path = with_query(
            format!("/applications/{}/start", segment(uuid)),
            &options.query_pairs(),
        );
        self.get(&path).await
    }

    pub async fn stop_application(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/applications/{}/stop", segment(uuid)))
            .await
    }

    pub async fn restart_application(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/applications/{}/restart", segment(uuid)))
            .await
    }

    pub async fn execute_application_command(
        &self,
        uuid: &str,
        command: &str,
    ) -> Result<Value, ClientError> {
        self.post(
            &format!("/applications/{}/execute", segment(uuid)),
            Some(json!({ "command": command })),
        )
        .await
    }

    pub async fn deploy_application(&self, uuid: &str) -> Result<Value, ClientError> {
        self.post(&format!("/applications/{}/deploy", segment(uuid)), None)
            .await
    }

    pub async fn get_application_logs(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/applications/{}/logs", segment(uuid)))
            .await
    }
}
