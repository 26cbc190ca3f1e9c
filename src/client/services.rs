use super::{segment, with_query, CoolifyClient};
use crate::errors::ClientError;
use crate::types::{DeleteOptions, Payload};
use serde_json::Value;

impl CoolifyClient {
    pub async fn list_services(&self) -> Result<Value, ClientError> {
        self.get("/services").await
    }

    pub async fn get_service(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/services/{}", segment(uuid))).await
    }

    pub async fn create_service(&self, data: Payload) -> Result<Value, ClientError> {
        self.post("/services", Some(Value::Object(data))).await
    }

    pub async fn update_service(&self, uuid: &str, data: Payload) -> Result<Value, ClientError> {
        self.patch(&format!("/services/{}", segment(uuid)), Value::Object(data))
            .await
    }

    pub async fn delete_service(
        &self,
        uuid: &str,
        options: &DeleteOptions,
    ) -> Result<Value, ClientError> {
        let path = with_query(
            format!("/services/{}", segment(uuid)),
            &options.query_pairs(),
        );
        self.delete(&path).await
    }

    pub async fn start_service(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/services/{}/start", segment(uuid))).await
    }

    pub async fn stop_service(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/services/{}/stop", segment(uuid))).await
    }

    pub async fn restart_service(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/services/{}/restart", segment(uuid))).await
    }
}
