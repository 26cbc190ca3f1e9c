use crate::client::CoolifyClient;
use crate::errors::ToolError;
use crate::managers::unknown_tool;
use crate::mcp::catalog::ToolDef;
use crate::mcp::schema::{self, string, FieldSet};
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::ToolArgs;
use serde_json::Value;
use std::sync::Arc;

/// Projects and the environments inside them.
pub struct ProjectManager {
    logger: Logger,
    client: Arc<CoolifyClient>,
}

impl ProjectManager {
    pub fn new(logger: Logger, client: Arc<CoolifyClient>) -> Self {
        Self {
            logger: logger.child("projects"),
            client,
        }
    }

    pub async fn handle_action(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.logger.debug(tool, None);
        let result = match tool {
            "list_projects" => self.client.list_projects().await?,
            "get_project" => self.client.get_project(&args.ensure_string("uuid")?).await?,
            "create_project" => self.client.create_project(args.into_payload()).await?,
            "update_project" => {
                let uuid = args.ensure_string("uuid")?;
                let data = args.without(&["uuid"]).into_payload();
                self.client.update_project(&uuid, data).await?
            }
            "delete_project" => self.client.delete_project(&args.ensure_string("uuid")?).await?,
            "get_project_environment" => {
                self.client
                    .get_project_environment(
                        &args.ensure_string("project_uuid")?,
                        &args.ensure_string("environment_name_or_uuid")?,
                    )
                    .await?
            }
            "list_project_environments" => {
                self.client
                    .list_project_environments(&args.ensure_string("project_uuid")?)
                    .await?
            }
            "create_project_environment" => {
                let project_uuid = args.ensure_string("project_uuid")?;
                let data = args.without(&["project_uuid"]).into_payload();
                self.client
                    .create_project_environment(&project_uuid, data)
                    .await?
            }
            "delete_project_environment" => {
                self.client
                    .delete_project_environment(
                        &args.ensure_string("project_uuid")?,
                        &args.ensure_string("environment_name_or_uuid")?,
                    )
                    .await?
            }
            _ => return Err(unknown_tool(tool, &self.tools())),
        };
        Ok(result)
    }
}

fn environment_ref() -> FieldSet {
    FieldSet::new()
        .required("project_uuid", string(""))
        .required("environment_name_or_uuid", string(""))
}

fn project_tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new("list_projects", "List all Coolify projects", FieldSet::new()),
        ToolDef::new("get_project", "Get project details", schema::uuid("")),
        ToolDef::new(
            "create_project",
            "Create a new project",
            FieldSet::new()
                .required("name", string(""))
                .optional("description", string("")),
        ),
        ToolDef::new(
            "update_project",
            "Update a project",
            schema::uuid("")
                .required("name", string(""))
                .optional("description", string("")),
        ),
        ToolDef::new("delete_project", "Delete a project", schema::uuid("")).destructive(),
        ToolDef::new(
            "get_project_environment",
            "Get project environment details",
            environment_ref(),
        ),
        ToolDef::new(
            "list_project_environments",
            "List all environments for a project",
            FieldSet::new().required("project_uuid", string("")),
        ),
        ToolDef::new(
            "create_project_environment",
            "Create a new environment for a project",
            FieldSet::new()
                .required("project_uuid", string(""))
                .required("name", string("Environment name")),
        ),
        ToolDef::new(
            "delete_project_environment",
            "Delete a project environment",
            environment_ref(),
        )
        .destructive(),
    ]
}

#[async_trait::async_trait]
impl ToolHandler for ProjectManager {
    fn tools(&self) -> Vec<ToolDef> {
        project_tools()
    }

    async fn handle(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.handle_action(tool, args).await
    }
}
