use crate::client::CoolifyClient;
use crate::errors::ToolError;
use crate::managers::unknown_tool;
use crate::mcp::catalog::ToolDef;
use crate::mcp::schema::{self, array_of, env_var_fields, object, string, FieldSet};
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::ToolArgs;
use crate::types::EnvScope;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnvAction {
    List,
    Create,
    Update,
    BulkUpdate,
    Delete,
}

impl EnvAction {
    const ALL: [EnvAction; 5] = [
        EnvAction::List,
        EnvAction::Create,
        EnvAction::Update,
        EnvAction::BulkUpdate,
        EnvAction::Delete,
    ];

    fn tool_name(self, scope: EnvScope) -> String {
        let label = scope.label();
        match self {
            EnvAction::List => format!("list_{}_envs", label),
            EnvAction::Create => format!("create_{}_env", label),
            EnvAction::Update => format!("update_{}_env", label),
            EnvAction::BulkUpdate => format!("bulk_update_{}_envs", label),
            EnvAction::Delete => format!("delete_{}_env", label),
        }
    }
}

/// Environment variables of one owner kind. The server registers one manager
/// per [`EnvScope`].
pub struct EnvVarManager {
    logger: Logger,
    client: Arc<CoolifyClient>,
    scope: EnvScope,
}

impl EnvVarManager {
    pub fn new(logger: Logger, client: Arc<CoolifyClient>, scope: EnvScope) -> Self {
        Self {
            logger: logger.child(&format!("{}_envs", scope.label())),
            client,
            scope,
        }
    }

    fn action(&self, tool: &str) -> Option<EnvAction> {
        EnvAction::ALL
            .into_iter()
            .find(|action| action.tool_name(self.scope) == tool)
    }

    pub async fn handle_action(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.logger.debug(tool, None);
        let Some(action) = self.action(tool) else {
            return Err(unknown_tool(tool, &self.tools()));
        };
        let scope = self.scope;
        let uuid = args.ensure_string("uuid")?;
        let result = match action {
            EnvAction::List => self.client.list_envs(scope, &uuid).await?,
            EnvAction::Create => {
                let data = args.without(&["uuid"]).into_payload();
                self.client.create_env(scope, &uuid, data).await?
            }
            EnvAction::Update => {
                let data = args.without(&["uuid"]).into_payload();
                self.client.update_env(scope, &uuid, data).await?
            }
            EnvAction::BulkUpdate => {
                let data = args.ensure_array("data")?;
                self.client.bulk_update_envs(scope, &uuid, data).await?
            }
            EnvAction::Delete => {
                let env_uuid = args.ensure_string("env_uuid")?;
                self.client.delete_env(scope, &uuid, &env_uuid).await?
            }
        };
        Ok(result)
    }
}

fn owner_uuid(scope: EnvScope) -> FieldSet {
    match scope {
        EnvScope::Application => schema::uuid("Application UUID"),
        EnvScope::Service => schema::uuid("Service UUID"),
    }
}

fn env_tools(scope: EnvScope) -> Vec<ToolDef> {
    let label = scope.label();
    EnvAction::ALL
        .into_iter()
        .map(|action| {
            let name = action.tool_name(scope);
            match action {
                EnvAction::List => ToolDef::new(
                    &name,
                    &format!("List {} environment variables", label),
                    owner_uuid(scope),
                )
                .sanitized(),
                EnvAction::Create => ToolDef::new(
                    &name,
                    &format!("Create {} environment variable", label),
                    owner_uuid(scope).merge(env_var_fields()),
                ),
                EnvAction::Update => ToolDef::new(
                    &name,
                    &format!("Update {} environment variable", label),
                    owner_uuid(scope).merge(env_var_fields()),
                ),
                EnvAction::BulkUpdate => ToolDef::new(
                    &name,
                    &format!("Bulk update {} environment variables", label),
                    owner_uuid(scope).required(
                        "data",
                        array_of(
                            object(env_var_fields(), ""),
                            "Array of environment variables",
                        ),
                    ),
                ),
                EnvAction::Delete => ToolDef::new(
                    &name,
                    &format!("Delete {} environment variable", label),
                    owner_uuid(scope)
                        .required("env_uuid", string("Environment variable UUID")),
                ),
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl ToolHandler for EnvVarManager {
    fn tools(&self) -> Vec<ToolDef> {
        env_tools(self.scope)
    }

    async fn handle(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.handle_action(tool, args).await
    }
}
