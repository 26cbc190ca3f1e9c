use crate::client::CoolifyClient;
use crate::errors::ToolError;
use crate::managers::unknown_tool;
use crate::mcp::catalog::ToolDef;
use crate::mcp::schema::{integer, FieldSet};
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::ToolArgs;
use serde_json::Value;
use std::sync::Arc;

pub struct TeamManager {
    logger: Logger,
    client: Arc<CoolifyClient>,
}

impl TeamManager {
    pub fn new(logger: Logger, client: Arc<CoolifyClient>) -> Self {
        Self {
            logger: logger.child("teams"),
            client,
        }
    }

    pub async fn handle_action(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.logger.debug(tool, None);
        let result = match tool {
            "list_teams" => self.client.list_teams().await?,
            "get_team" => self.client.get_team(args.ensure_id("id")?).await?,
            "get_team_members" => self.client.get_team_members(args.ensure_id("id")?).await?,
            "get_current_team" => self.client.get_current_team().await?,
            "get_current_team_members" => self.client.get_current_team_members().await?,
            _ => return Err(unknown_tool(tool, &self.tools())),
        };
        Ok(result)
    }
}

fn team_id() -> FieldSet {
    FieldSet::new().required("id", integer("Team ID"))
}

fn team_tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new("list_teams", "List all teams", FieldSet::new()).pretty(),
        ToolDef::new("get_team", "Get team details", team_id()).pretty(),
        ToolDef::new("get_team_members", "Get team members", team_id()).pretty(),
        ToolDef::new(
            "get_current_team",
            "Get currently authenticated team",
            FieldSet::new(),
        )
        .pretty(),
        ToolDef::new(
            "get_current_team_members",
            "Get members of currently authenticated team",
            FieldSet::new(),
        )
        .pretty(),
    ]
}

#[async_trait::async_trait]
impl ToolHandler for TeamManager {
    fn tools(&self) -> Vec<ToolDef> {
        team_tools()
    }

    async fn handle(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.handle_action(tool, args).await
    }
}
