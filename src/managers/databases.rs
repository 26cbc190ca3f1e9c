use crate::client::CoolifyClient;
use crate::errors::ToolError;
use crate::managers::{nested_delete_options, unknown_tool};
use crate::mcp::catalog::ToolDef;
use crate::mcp::schema::{
    self, boolean, database_base_fields, delete_options_object, integer, record, string, FieldSet,
};
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::ToolArgs;
use crate::types::DatabaseEngine;
use serde_json::Value;
use std::sync::Arc;

/// Databases of every engine, their lifecycle and scheduled backups.
pub struct DatabaseManager {
    logger: Logger,
    client: Arc<CoolifyClient>,
}

impl DatabaseManager {
    pub fn new(logger: Logger, client: Arc<CoolifyClient>) -> Self {
        Self {
            logger: logger.child("databases"),
            client,
        }
    }

    pub async fn handle_action(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.logger.debug(tool, None);
        if let Some(engine) = DatabaseEngine::from_tool_name(tool) {
            return Ok(self
                .client
                .create_database(engine, args.into_payload())
                .await?);
        }
        let result = match tool {
            "list_databases" => self.client.list_databases().await?,
            "get_database" => self.client.get_database(&args.ensure_string("uuid")?).await?,
            "update_database" => {
                let uuid = args.ensure_string("uuid")?;
                let data = args.ensure_object("data")?;
                self.client.update_database(&uuid, data).await?
            }
            "delete_database" => {
                let uuid = args.ensure_string("uuid")?;
                let options = nested_delete_options(&args);
                self.client.delete_database(&uuid, &options).await?
            }
            "start_database" => {
                self.client
                    .start_database(&args.ensure_string("uuid")?)
                    .await?
            }
            "stop_database" => self.client.stop_database(&args.ensure_string("uuid")?).await?,
            "restart_database" => {
                self.client
                    .restart_database(&args.ensure_string("uuid")?)
                    .await?
            }
            "list_database_backups" => {
                self.client
                    .list_database_backups(&args.ensure_string("uuid")?)
                    .await?
            }
            "create_database_backup" => {
                let uuid = args.ensure_string("uuid")?;
                let data = args.without(&["uuid"]).into_payload();
                self.client.create_database_backup(&uuid, data).await?
            }
            "update_database_backup" => {
                let uuid = args.ensure_string("uuid")?;
                let backup_uuid = args.ensure_string("backup_uuid")?;
                let data = args.without(&["uuid", "backup_uuid"]).into_payload();
                self.client
                    .update_database_backup(&uuid, &backup_uuid, data)
                    .await?
            }
            "delete_database_backup" => {
                self.client
                    .delete_database_backup(
                        &args.ensure_string("uuid")?,
                        &args.ensure_string("backup_uuid")?,
                    )
                    .await?
            }
            "list_backup_executions" => {
                self.client
                    .list_backup_executions(
                        &args.ensure_string("uuid")?,
                        &args.ensure_string("backup_uuid")?,
                    )
                    .await?
            }
            "delete_backup_execution" => {
                self.client
                    .delete_backup_execution(
                        &args.ensure_string("uuid")?,
                        &args.ensure_string("backup_uuid")?,
                        &args.ensure_string("execution_uuid")?,
                    )
                    .await?
            }
            _ => return Err(unknown_tool(tool, &self.tools())),
        };
        Ok(result)
    }
}

fn creation_fields(engine: DatabaseEngine) -> FieldSet {
    engine
        .credential_fields()
        .iter()
        .fold(database_base_fields(), |fields, name| {
            fields.optional(name, string(""))
        })
}

fn backup_settings(frequency_required: bool) -> FieldSet {
    let frequency = string("Backup frequency (cron expression)");
    let fields = if frequency_required {
        FieldSet::new().required("frequency", frequency)
    } else {
        FieldSet::new().optional("frequency", frequency)
    };
    fields
        .optional("enabled", boolean("Enable the backup schedule"))
        .optional("save_s3", boolean("Save backup to S3"))
        .optional("s3_storage_id", integer("S3 storage ID"))
        .optional("databases_to_backup", string("Specific databases to backup"))
}

fn backup_ref() -> FieldSet {
    schema::uuid("Database UUID").required("backup_uuid", string("Backup configuration UUID"))
}

fn database_tools() -> Vec<ToolDef> {
    let mut tools = vec![
        ToolDef::new("list_databases", "List all databases", FieldSet::new()),
        ToolDef::new("get_database", "Get database details", schema::uuid("")),
        ToolDef::new(
            "update_database",
            "Update a database",
            schema::uuid("").required("data", record("Database update fields")),
        ),
        ToolDef::new(
            "delete_database",
            "Delete a database",
            schema::uuid("").optional("options", delete_options_object()),
        )
        .destructive(),
    ];
    tools.extend(DatabaseEngine::ALL.into_iter().map(|engine| {
        ToolDef::new(
            engine.tool_name(),
            &format!("Create a {} database", engine.display_name()),
            creation_fields(engine),
        )
    }));
    tools.extend([
        ToolDef::new("start_database", "Start a database", schema::uuid("Database UUID")),
        ToolDef::new("stop_database", "Stop a database", schema::uuid("Database UUID")),
        ToolDef::new(
            "restart_database",
            "Restart a database",
            schema::uuid("Database UUID"),
        ),
        ToolDef::new(
            "list_database_backups",
            "List scheduled backups for a database",
            schema::uuid("Database UUID"),
        ),
        ToolDef::new(
            "create_database_backup",
            "Create a scheduled backup configuration for a database",
            schema::uuid("Database UUID").merge(backup_settings(true)),
        ),
        ToolDef::new(
            "update_database_backup",
            "Update a scheduled backup configuration",
            backup_ref().merge(backup_settings(false)),
        ),
        ToolDef::new(
            "delete_database_backup",
            "Delete a scheduled backup configuration",
            backup_ref(),
        ),
        ToolDef::new(
            "list_backup_executions",
            "List backup executions for a scheduled backup",
            backup_ref(),
        ),
        ToolDef::new(
            "delete_backup_execution",
            "Delete a specific backup execution",
            backup_ref().required("execution_uuid", string("Backup execution UUID")),
        ),
    ]);
    tools
}

#[async_trait::async_trait]
impl ToolHandler for DatabaseManager {
    fn tools(&self) -> Vec<ToolDef> {
        database_tools()
    }

    async fn handle(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.handle_action(tool, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_engine_gets_a_creation_tool() {
        let tools = database_tools();
        for engine in DatabaseEngine::ALL {
            let def = tools
                .iter()
                .find(|t| t.name == engine.tool_name())
                .expect("creation tool");
            for field in engine.credential_fields() {
                assert!(
                    def.input_schema["properties"].get(*field).is_some(),
                    "{} lacks {}",
                    def.name,
                    field
                );
            }
            assert_eq!(
                def.input_schema["required"],
                serde_json::json!(["project_uuid", "server_uuid"])
            );
        }
        let postgres = tools
            .iter()
            .find(|t| t.name == "create_postgres_database")
            .expect("postgres");
        assert_eq!(postgres.description, "Create a PostgreSQL database");
    }

    #[test]
    fn backup_frequency_is_required_only_on_create() {
        let tools = database_tools();
        let required_of = |name: &str| {
            tools
                .iter()
                .find(|t| t.name == name)
                .map(|t| t.input_schema["required"].clone())
                .expect("tool")
        };
        assert_eq!(
            required_of("create_database_backup"),
            serde_json::json!(["uuid", "frequency"])
        );
        assert_eq!(
            required_of("update_database_backup"),
            serde_json::json!(["uuid", "backup_uuid"])
        );
    }
}
