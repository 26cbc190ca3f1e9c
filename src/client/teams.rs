use super::CoolifyClient;
use crate::errors::ClientError;
use serde_json::Value;

impl CoolifyClient {
    pub async fn list_teams(&self) -> Result<Value, ClientError> {
        self.get("/teams").await
    }

    pub async fn get_team(&self, id: u64) -> Result<Value, ClientError> {
        self.get(&format!("/teams/{}", id)).await
    }

    pub async fn get_team_members(&self, id: u64) -> Result<Value, ClientError> {
        self.get(&format!("/teams/{}/members", id)).await
    }

    pub async fn get_current_team(&self) -> Result<Value, ClientError> {
        self.get("/teams/current").await
    }

    pub async fn get_current_team_members(&self) -> Result<Value, ClientError> {
        self.get("/teams/current/members").await
    }
}
