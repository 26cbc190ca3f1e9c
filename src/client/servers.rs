use super::{segment, CoolifyClient};
use crate::errors::ClientError;
use crate::types::Payload;
use serde_json::Value;

impl CoolifyClient {
    pub async fn list_servers(&self) -> Result<Value, ClientError> {
        self.get("/servers").await
    }

    pub async fn get_server(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/servers/{}", segment(uuid))).await
    }

    pub async fn create_server(&self, data: Payload) -> Result<Value, ClientError> {
        self.post("/servers", Some(Value::Object(data))).await
    }

    pub async fn update_server(&self, uuid: &str, data: Payload) -> Result<Value, ClientError> {
        self.patch(&format!("/servers/{}", segment(uuid)), Value::Object(data))
            .await
    }

    pub async fn delete_server(&self, uuid: &str) -> Result<Value, ClientError> {
        self.delete(&format!("/servers/{}", segment(uuid))).await
    }

    pub async fn get_server_resources(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/servers/{}/resources", segment(uuid)))
            .await
    }

    pub async fn get_server_domains(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/servers/{}/domains", segment(uuid))).await
    }

    pub async fn validate_server(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/servers/{}/validate", segment(uuid))).await
    }
}
