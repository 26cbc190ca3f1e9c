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

/// SSH private keys stored in Coolify.
pub struct KeyManager {
    logger: Logger,
    client: Arc<CoolifyClient>,
}

impl KeyManager {
    pub fn new(logger: Logger, client: Arc<CoolifyClient>) -> Self {
        Self {
            logger: logger.child("keys"),
            client,
        }
    }

    pub async fn handle_action(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.logger.debug(tool, None);
        let result = match tool {
            "list_private_keys" => self.client.list_private_keys().await?,
            "get_private_key" => {
                self.client
                    .get_private_key(&args.ensure_string("uuid")?)
                    .await?
            }
            "create_private_key" => self.client.create_private_key(args.into_payload()).await?,
            "update_private_key" => self.client.update_private_key(args.into_payload()).await?,
            "delete_private_key" => {
                self.client
                    .delete_private_key(&args.ensure_string("uuid")?)
                    .await?
            }
            _ => return Err(unknown_tool(tool, &self.tools())),
        };
        Ok(result)
    }
}

fn key_fields() -> FieldSet {
    FieldSet::new()
        .required("private_key", string("The private key content"))
        .optional("name", string(""))
        .optional("description", string(""))
}

fn key_tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new("list_private_keys", "List all private keys", FieldSet::new()),
        ToolDef::new("get_private_key", "Get private key details", schema::uuid("")),
        ToolDef::new("create_private_key", "Create a new private key", key_fields()),
        ToolDef::new("delete_private_key", "Delete a private key", schema::uuid("")).destructive(),
        ToolDef::new(
            "update_private_key",
            "Update a private key",
            key_fields().optional("uuid", string("Private key UUID")),
        ),
    ]
}

#[async_trait::async_trait]
impl ToolHandler for KeyManager {
    fn tools(&self) -> Vec<ToolDef> {
        key_tools()
    }

    async fn handle(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.handle_action(tool, args).await
    }
}
