use super::{segment, CoolifyClient};
use crate::errors::ClientError;
use crate::types::Payload;
use serde_json::Value;

impl CoolifyClient {
    pub async fn list_private_keys(&self) -> Result<Value, ClientError> {
        self.get("/security/keys").await
    }

    pub async fn get_private_key(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/security/keys/{}", segment(uuid))).await
    }

    pub async fn create_private_key(&self, data: Payload) -> Result<Value, ClientError> {
        self.post("/security/keys", Some(Value::Object(data))).await
    }

    /// `PATCH /security/keys` takes the key's `uuid` in the body.
    pub async fn update_private_key(&self, data: Payload) -> Result<Value, ClientError> {
        self.patch("/security/keys", Value::Object(data)).await
    }

    pub async fn delete_private_key(&self, uuid: &str) -> Result<Value, ClientError> {
        self.delete(&format!("/security/keys/{}", segment(uuid)))
            .await
    }
}
