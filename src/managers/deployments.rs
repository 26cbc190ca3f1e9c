use crate::client::CoolifyClient;
use crate::errors::ToolError;
use crate::managers::unknown_tool;
use crate::mcp::catalog::ToolDef;
use crate::mcp::schema::{self, boolean, string, FieldSet};
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::ToolArgs;
use crate::types::DeployOptions;
use serde_json::Value;
use std::sync::Arc;

pub struct DeploymentManager {
    logger: Logger,
    client: Arc<CoolifyClient>,
}

impl DeploymentManager {
    pub fn new(logger: Logger, client: Arc<CoolifyClient>) -> Self {
        Self {
            logger: logger.child("deployments"),
            client,
        }
    }

    pub async fn handle_action(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.logger.debug(tool, None);
        let result = match tool {
            "list_deployments" => self.client.list_deployments().await?,
            "get_deployment" => {
                self.client
                    .get_deployment(&args.ensure_string("uuid")?)
                    .await?
            }
            "get_deployments_by_application" => {
                self.client
                    .get_deployments_by_application(&args.ensure_string("uuid")?)
                    .await?
            }
            "cancel_deployment" => {
                self.client
                    .cancel_deployment(&args.ensure_string("uuid")?)
                    .await?
            }
            "deploy" => {
                let options = DeployOptions {
                    tag: args.optional_string("tag"),
                    uuid: args.optional_string("uuid"),
                    force: args.flag("force"),
                };
                self.client.deploy(&options).await?
            }
            _ => return Err(unknown_tool(tool, &self.tools())),
        };
        Ok(result)
    }
}

fn deployment_tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "list_deployments",
            "List currently running deployments",
            FieldSet::new(),
        )
        .pretty(),
        ToolDef::new("get_deployment", "Get deployment details", schema::uuid("")).pretty(),
        ToolDef::new(
            "get_deployments_by_application",
            "Get all deployments for a specific application",
            schema::uuid("Application UUID"),
        )
        .pretty(),
        ToolDef::new(
            "cancel_deployment",
            "Cancel a running deployment",
            schema::uuid("Deployment UUID"),
        ),
        ToolDef::new(
            "deploy",
            "Deploy by tag or UUID (can deploy multiple resources)",
            FieldSet::new()
                .optional("tag", string("Tag name(s), comma separated"))
                .optional("uuid", string("Resource UUID(s), comma separated"))
                .optional("force", boolean("Force rebuild without cache")),
        ),
    ]
}

#[async_trait::async_trait]
impl ToolHandler for DeploymentManager {
    fn tools(&self) -> Vec<ToolDef> {
        deployment_tools()
    }

    async fn handle(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.handle_action(tool, args).await
    }
}
