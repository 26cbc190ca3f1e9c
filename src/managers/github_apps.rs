use crate::client::CoolifyClient;
use crate::errors::ToolError;
use crate::managers::unknown_tool;
use crate::mcp::catalog::ToolDef;
use crate::mcp::schema::{boolean, integer, string, FieldSet};
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::ToolArgs;
use serde_json::Value;
use std::sync::Arc;

/// GitHub App integrations. Unlike most resources these are addressed by
/// numeric id.
pub struct GithubAppManager {
    logger: Logger,
    client: Arc<CoolifyClient>,
}

impl GithubAppManager {
    pub fn new(logger: Logger, client: Arc<CoolifyClient>) -> Self {
        Self {
            logger: logger.child("github_apps"),
            client,
        }
    }

    pub async fn handle_action(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.logger.debug(tool, None);
        let result = match tool {
            "list_github_apps" => self.client.list_github_apps().await?,
            "create_github_app" => self.client.create_github_app(args.into_payload()).await?,
            "update_github_app" => {
                let id = args.ensure_id("id")?;
                let data = args.without(&["id"]).into_payload();
                self.client.update_github_app(id, data).await?
            }
            "delete_github_app" => self.client.delete_github_app(args.ensure_id("id")?).await?,
            "list_github_app_repositories" => {
                self.client
                    .list_github_app_repositories(args.ensure_id("id")?)
                    .await?
            }
            "list_github_app_branches" => {
                self.client
                    .list_github_app_branches(
                        args.ensure_id("id")?,
                        &args.ensure_string("owner")?,
                        &args.ensure_string("repo")?,
                    )
                    .await?
            }
            _ => return Err(unknown_tool(tool, &self.tools())),
        };
        Ok(result)
    }
}

fn app_id() -> FieldSet {
    FieldSet::new().required("id", integer("GitHub App ID in Coolify"))
}

fn github_app_tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new("list_github_apps", "List all GitHub Apps", FieldSet::new()),
        ToolDef::new(
            "create_github_app",
            "Create a new GitHub App integration",
            FieldSet::new()
                .required("name", string("GitHub App name"))
                .optional("organization", string("GitHub organization"))
                .required("app_id", integer("GitHub App ID"))
                .required("installation_id", integer("GitHub App installation ID"))
                .required("client_id", string("GitHub App client ID"))
                .required("client_secret", string("GitHub App client secret"))
                .required("webhook_secret", string("GitHub App webhook secret"))
                .required("private_key", string("GitHub App private key"))
                .optional("is_system_wide", boolean("Make available system-wide")),
        ),
        ToolDef::new(
            "update_github_app",
            "Update a GitHub App integration",
            app_id()
                .optional("name", string(""))
                .optional("organization", string(""))
                .optional("app_id", integer(""))
                .optional("installation_id", integer(""))
                .optional("client_id", string(""))
                .optional("client_secret", string(""))
                .optional("webhook_secret", string(""))
                .optional("private_key", string(""))
                .optional("is_system_wide", boolean("")),
        ),
        ToolDef::new(
            "delete_github_app",
            "Delete a GitHub App integration",
            app_id(),
        )
        .destructive(),
        ToolDef::new(
            "list_github_app_repositories",
            "List repositories accessible by a GitHub App",
            app_id(),
        )
        .pretty(),
        ToolDef::new(
            "list_github_app_branches",
            "List branches for a repository accessible by a GitHub App",
            app_id()
                .required("owner", string("Repository owner"))
                .required("repo", string("Repository name")),
        )
        .pretty(),
    ]
}

#[async_trait::async_trait]
impl ToolHandler for GithubAppManager {
    fn tools(&self) -> Vec<ToolDef> {
        github_app_tools()
    }

    async fn handle(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.handle_action(tool, args).await
    }
}
