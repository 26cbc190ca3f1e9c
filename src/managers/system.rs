use crate::client::CoolifyClient;
use crate::errors::ToolError;
use crate::managers::unknown_tool;
use crate::mcp::catalog::ToolDef;
use crate::mcp::schema::FieldSet;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::ToolArgs;
use serde_json::{json, Value};
use std::sync::Arc;

/// Instance-wide utilities: version, health and the API switch.
pub struct SystemManager {
    logger: Logger,
    client: Arc<CoolifyClient>,
}

impl SystemManager {
    pub fn new(logger: Logger, client: Arc<CoolifyClient>) -> Self {
        Self {
            logger: logger.child("system"),
            client,
        }
    }

    pub async fn handle_action(&self, tool: &str, _args: ToolArgs) -> Result<Value, ToolError> {
        self.logger.debug(tool, None);
        let result = match tool {
            "list_resources" => self.client.list_resources().await?,
            "get_version" => json!({ "version": self.client.get_version().await? }),
            "healthcheck" => json!({ "status": self.client.healthcheck().await? }),
            "enable_api" => self.client.enable_api().await?,
            "disable_api" => self.client.disable_api().await?,
            _ => return Err(unknown_tool(tool, &self.tools())),
        };
        Ok(result)
    }
}

fn system_tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new("list_resources", "List all resources", FieldSet::new()),
        ToolDef::new("get_version", "Get Coolify version", FieldSet::new()).pretty(),
        ToolDef::new("healthcheck", "Check Coolify API health", FieldSet::new()).pretty(),
        ToolDef::new("enable_api", "Enable the Coolify API", FieldSet::new()),
        ToolDef::new("disable_api", "Disable the Coolify API", FieldSet::new()).destructive(),
    ]
}

#[async_trait::async_trait]
impl ToolHandler for SystemManager {
    fn tools(&self) -> Vec<ToolDef> {
        system_tools()
    }

    async fn handle(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.handle_action(tool, args).await
    }
}
