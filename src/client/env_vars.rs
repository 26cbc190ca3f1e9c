//! Environment variables are the same five endpoints for applications and
//! services; only the collection prefix differs.

use super::{segment, CoolifyClient};
use crate::errors::ClientError;
use crate::types::{EnvScope, Payload};
use serde_json::{json, Value};

fn envs_path(scope: EnvScope, uuid: &str) -> String {
    format!("/{}/{}/envs", scope.collection(), segment(uuid))
}

impl CoolifyClient {
    pub async fn list_envs(&self, scope: EnvScope, uuid: &str) -> Result<Value, ClientError> {
        self.get(&envs_path(scope, uuid)).await
    }

    pub async fn create_env(
        &self,
        scope: EnvScope,
        uuid: &str,
        data: Payload,
    ) -> Result<Value, ClientError> {
        self.post(&envs_path(scope, uuid), Some(Value::Object(data)))
            .await
    }

    pub async fn update_env(
        &self,
        scope: EnvScope,
        uuid: &str,
        data: Payload,
    ) -> Result<Value, ClientError> {
        self.patch(&envs_path(scope, uuid), Value::Object(data)).await
    }

    pub async fn bulk_update_envs(
        &self,
        scope: EnvScope,
        uuid: &str,
        data: Vec<Value>,
    ) -> Result<Value, ClientError> {
        self.patch(
            &format!("{}/bulk", envs_path(scope, uuid)),
            json!({ "data": data }),
        )
        .await
    }

    pub async fn delete_env(
        &self,
        scope: EnvScope,
        uuid: &str,
        env_uuid: &str,
    ) -> Result<Value, ClientError> {
        self.delete(&format!("{}/{}", envs_path(scope, uuid), segment(env_uuid)))
            .await
    }
}
