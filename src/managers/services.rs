use crate::client::CoolifyClient;
use crate::errors::ToolError;
use crate::managers::{nested_delete_options, unknown_tool};
use crate::mcp::catalog::ToolDef;
use crate::mcp::schema::{self, boolean, delete_options_object, string, FieldSet};
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::ToolArgs;
use serde_json::Value;
use std::sync::Arc;

/// One-click services built from Coolify templates.
pub struct ServiceManager {
    logger: Logger,
    client: Arc<CoolifyClient>,
}

impl ServiceManager {
    pub fn new(logger: Logger, client: Arc<CoolifyClient>) -> Self {
        Self {
            logger: logger.child("services"),
            client,
        }
    }

    pub async fn handle_action(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.logger.debug(tool, None);
        let result = match tool {
            "list_services" => self.client.list_services().await?,
            "get_service" => self.client.get_service(&args.ensure_string("uuid")?).await?,
            "create_service" => self.client.create_service(args.into_payload()).await?,
            "update_service" => {
                let uuid = args.ensure_string("uuid")?;
                let data = args.without(&["uuid"]).into_payload();
                self.client.update_service(&uuid, data).await?
            }
            "delete_service" => {
                let uuid = args.ensure_string("uuid")?;
                let options = nested_delete_options(&args);
                self.client.delete_service(&uuid, &options).await?
            }
            "start_service" => self.client.start_service(&args.ensure_string("uuid")?).await?,
            "stop_service" => self.client.stop_service(&args.ensure_string("uuid")?).await?,
            "restart_service" => {
                self.client
                    .restart_service(&args.ensure_string("uuid")?)
                    .await?
            }
            _ => return Err(unknown_tool(tool, &self.tools())),
        };
        Ok(result)
    }
}

fn service_tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new("list_services", "List all one-click services", FieldSet::new()),
        ToolDef::new("get_service", "Get service details", schema::uuid("")),
        ToolDef::new(
            "create_service",
            "Create a one-click service (e.g., penpot, n8n, wordpress)",
            FieldSet::new()
                .required(
                    "type",
                    string(
                        "Service type - must be a valid Coolify service type \
                         (e.g., penpot, n8n, wordpress-with-mysql, activepieces, appwrite, etc.). \
                         See Coolify documentation for full list.",
                    ),
                )
                .required("project_uuid", string(""))
                .required("server_uuid", string(""))
                .optional("name", string(""))
                .optional("description", string(""))
                .optional("environment_name", string(""))
                .optional("environment_uuid", string(""))
                .optional("destination_uuid", string(""))
                .optional("instant_deploy", boolean("")),
        ),
        ToolDef::new(
            "update_service",
            "Update a service",
            schema::uuid("Service UUID")
                .optional("name", string(""))
                .optional("description", string(""))
                .optional("domains", string("Service domains"))
                .optional("instant_deploy", boolean("")),
        ),
        ToolDef::new(
            "delete_service",
            "Delete a service",
            schema::uuid("").optional("options", delete_options_object()),
        )
        .destructive(),
        ToolDef::new("start_service", "Start a service", schema::uuid("")),
        ToolDef::new("stop_service", "Stop a service", schema::uuid("")),
        ToolDef::new("restart_service", "Restart a service", schema::uuid("")),
    ]
}

#[async_trait::async_trait]
impl ToolHandler for ServiceManager {
    fn tools(&self) -> Vec<ToolDef> {
        service_tools()
    }

    async fn handle(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.handle_action(tool, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_type_is_a_free_string() {
        let tools = service_tools();
        let create = tools
            .iter()
            .find(|t| t.name == "create_service")
            .expect("create_service");
        let field = &create.input_schema["properties"]["type"];
        assert_eq!(field["type"], "string");
        assert!(field.get("enum").is_none());
    }
}
