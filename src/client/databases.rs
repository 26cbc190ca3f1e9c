use super::{segment, with_query, CoolifyClient};
use crate::errors::ClientError;
use crate::types::{DatabaseEngine, DeleteOptions, Payload};
use serde_json::Value;

fn backup_path(uuid: &str, backup_uuid: &str) -> String {
    format!("/databases/{}/backups/{}", segment(uuid), segment(backup_uuid))
}

impl CoolifyClient {
    pub async fn list_databases(&self) -> Result<Value, ClientError> {
        self.get("/databases").await
    }

    pub async fn get_database(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/databases/{}", segment(uuid))).await
    }

    pub async fn create_database(
        &self,
        engine: DatabaseEngine,
        data: Payload,
    ) -> Result<Value, ClientError> {
        self.post(engine.endpoint(), Some(Value::Object(data))).await
    }

    pub async fn update_database(&self, uuid: &str, data: Payload) -> Result<Value, ClientError> {
        self.patch(&format!("/databases/{}", segment(uuid)), Value::Object(data))
            .await
    }

    pub async fn delete_database(
        &self,
        uuid: &str,
        options: &DeleteOptions,
    ) -> Result<Value, ClientError> {
        let path = with_query(
            format!("/databases/{}", segment(uuid)),
            &options.query_pairs(),
        );
        self.delete(&path).await
    }

    pub async fn start_database(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/databases/{}/start", segment(uuid))).await
    }

    pub async fn stop_database(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/databases/{}/stop", segment(uuid))).await
    }

    pub async fn restart_database(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/databases/{}/restart", segment(uuid)))
            .await
    }

    pub async fn list_database_backups(&self, uuid: &str) -> Result<Value, ClientError> {
        self.get(&format!("/databases/{}/backups", segment(uuid)))
            .await
    }

    pub async fn create_database_backup(
        &self,
        uuid: &str,
        data: Payload,
    ) -> Result<Value, ClientError> {
        self.post(
            &format!("/databases/{}/backups", segment(uuid)),
            Some(Value::Object(data)),
        )
        .await
    }

    pub async fn update_database_backup(
        &self,
        uuid: &str,
        backup_uuid: &str,
        data: Payload,
    ) -> Result<Value, ClientError> {
        self.patch(&backup_path(uuid, backup_uuid), Value::Object(data))
            .await
    }

    pub async fn delete_database_backup(
        &self,
        uuid: &str,
        backup_uuid: &str,
    ) -> Result<Value, ClientError> {
        self.delete(&backup_path(uuid, backup_uuid)).await
    }

    pub async fn list_backup_executions(
        &self,
        uuid: &str,
        backup_uuid: &str,
    ) -> Result<Value, ClientError> {
        self.get(&format!("{}/executions", backup_path(uuid, backup_uuid)))
            .await
    }

    pub async fn delete_backup_execution(
        &self,
        uuid: &str,
        backup_uuid: &str,
        execution_uuid: &str,
    ) -> Result<Value, ClientError> {
        self.delete(&format!(
            "{}/executions/{}",
            backup_path(uuid, backup_uuid),
            segment(execution_uuid)
        ))
        .await
    }
}
