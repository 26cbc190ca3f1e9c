use crate::client::CoolifyClient;
use crate::errors::ToolError;
use crate::managers::unknown_tool;
use crate::mcp::catalog::ToolDef;
use crate::mcp::schema::{self, boolean, integer, proxy_type, string, FieldSet};
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::ToolArgs;
use serde_json::Value;
use std::sync::Arc;

pub struct ServerManager {
    logger: Logger,
    client: Arc<CoolifyClient>,
}

impl ServerManager {
    pub fn new(logger: Logger, client: Arc<CoolifyClient>) -> Self {
        Self {
            logger: logger.child("servers"),
            client,
        }
    }

    pub async fn handle_action(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.logger.debug(tool, None);
        let result = match tool {
            "list_servers" => self.client.list_servers().await?,
            "get_server" => self.client.get_server(&args.ensure_string("uuid")?).await?,
            "create_server" => self.client.create_server(args.into_payload()).await?,
            "update_server" => {
                let uuid = args.ensure_string("uuid")?;
                let data = args.without(&["uuid"]).into_payload();
                self.client.update_server(&uuid, data).await?
            }
            "delete_server" => self.client.delete_server(&args.ensure_string("uuid")?).await?,
            "get_server_resources" => {
                self.client
                    .get_server_resources(&args.ensure_string("uuid")?)
                    .await?
            }
            "get_server_domains" => {
                self.client
                    .get_server_domains(&args.ensure_string("uuid")?)
                    .await?
            }
            "validate_server" => {
                self.client
                    .validate_server(&args.ensure_string("uuid")?)
                    .await?
            }
            _ => return Err(unknown_tool(tool, &self.tools())),
        };
        Ok(result)
    }
}

fn server_tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new("list_servers", "List all Coolify servers", FieldSet::new()),
        ToolDef::new(
            "get_server",
            "Get details about a specific Coolify server",
            schema::uuid("UUID of the server"),
        ),
        ToolDef::new(
            "create_server",
            "Create a new Coolify server",
            FieldSet::new()
                .required("ip", string("Server IP address"))
                .required("private_key_uuid", string("UUID of the private key for SSH"))
                .optional("name", string("Server name"))
                .optional("description", string(""))
                .optional("port", integer("SSH port (default 22)"))
                .optional("user", string("SSH user (default root)"))
                .optional("is_build_server", boolean(""))
                .optional("instant_validate", boolean(""))
                .optional("proxy_type", proxy_type()),
        ),
        ToolDef::new(
            "update_server",
            "Update a Coolify server",
            schema::uuid("")
                .optional("name", string(""))
                .optional("description", string(""))
                .optional("ip", string(""))
                .optional("port", integer(""))
                .optional("user", string(""))
                .optional("private_key_uuid", string(""))
                .optional("is_build_server", boolean(""))
                .optional("proxy_type", proxy_type()),
        ),
        ToolDef::new("delete_server", "Delete a Coolify server", schema::uuid("")).destructive(),
        ToolDef::new(
            "get_server_resources",
            "Get resources running on a server",
            schema::uuid(""),
        ),
        ToolDef::new("get_server_domains", "Get domains for a server", schema::uuid("")),
        ToolDef::new(
            "validate_server",
            "Validate a server connection",
            schema::uuid(""),
        ),
    ]
}

#[async_trait::async_trait]
impl ToolHandler for ServerManager {
    fn tools(&self) -> Vec<ToolDef> {
        server_tools()
    }

    async fn handle(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.handle_action(tool, args).await
    }
}
