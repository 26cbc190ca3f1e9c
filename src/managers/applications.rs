use crate::client::CoolifyClient;
use crate::errors::ToolError;
use crate::managers::unknown_tool;
use crate::mcp::catalog::ToolDef;
use crate::mcp::schema::{
    self, boolean, build_pack, delete_option_fields, placement_fields, string, FieldSet,
};
use crate::services::logger::Logger;
use crate::services::security::ensure_command_allowed;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::ToolArgs;
use crate::types::{ApplicationSource, DeleteOptions, StartOptions};
use serde_json::Value;
use std::sync::Arc;

pub struct ApplicationManager {
    logger: Logger,
    client: Arc<CoolifyClient>,
}

impl ApplicationManager {
    pub fn new(logger: Logger, client: Arc<CoolifyClient>) -> Self {
        Self {
            logger: logger.child("applications"),
            client,
        }
    }

    pub async fn handle_action(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.logger.debug(tool, None);
        if let Some(source) = ApplicationSource::from_tool_name(tool) {
            return Ok(self
                .client
                .create_application(source, args.into_payload())
                .await?);
        }
        let result = match tool {
            "list_applications" => self.client.list_applications().await?,
            "get_application" => {
                self.client
                    .get_application(&args.ensure_string("uuid")?)
                    .await?
            }
            "update_application" => {
                let uuid = args.ensure_string("uuid")?;
                let data = args
                    .without(&["uuid"])
                    .rename("domains", "fqdn")
                    .into_payload();
                self.client.update_application(&uuid, data).await?
            }
            "delete_application" => {
                let uuid = args.ensure_string("uuid")?;
                let options = DeleteOptions {
                    delete_configurations: args.optional_bool("delete_configurations"),
                    delete_volumes: args.optional_bool("delete_volumes"),
                    docker_cleanup: args.optional_bool("docker_cleanup"),
                    delete_connected_networks: args.optional_bool("delete_connected_networks"),
                };
                self.client.delete_application(&uuid, &options).await?
            }
            "start_application" => {
                let options = StartOptions {
                    force: args.flag("force"),
                    instant_deploy: args.flag("instant_deploy"),
                };
                self.client
                    .start_application(&args.ensure_string("uuid")?, &options)
                    .await?
            }
            "stop_application" => {
                self.client
                    .stop_application(&args.ensure_string("uuid")?)
                    .await?
            }
            "restart_application" => {
                self.client
                    .restart_application(&args.ensure_string("uuid")?)
                    .await?
            }
            "deploy_application" => {
                self.client
                    .deploy_application(&args.ensure_string("uuid")?)
                    .await?
            }
            "get_application_logs" => {
                self.client
                    .get_application_logs(&args.ensure_string("uuid")?)
                    .await?
            }
            "execute_application_command" => {
                let uuid = args.ensure_string("uuid")?;
                let command = args.string("command")?;
                ensure_command_allowed(&command)?;
                self.client
                    .execute_application_command(&uuid, &command)
                    .await?
            }
            _ => return Err(unknown_tool(tool, &self.tools())),
        };
        Ok(result)
    }
}

/// Placement plus the descriptive fields every creation flavor accepts.
fn application_base() -> FieldSet {
    placement_fields()
        .optional("name", string(""))
        .optional("description", string(""))
        .optional("instant_deploy", boolean(""))
}

fn git_source(repository_description: &str, ports_description: &str) -> FieldSet {
    FieldSet::new()
        .required("git_repository", string(repository_description))
        .required("git_branch", string(""))
        .required("build_pack", build_pack())
        .required("ports_exposes", string(ports_description))
}

fn creation_fields(source: ApplicationSource) -> FieldSet {
    match source {
        ApplicationSource::PublicGit => application_base()
            .merge(git_source(
                "Public git repository URL",
                "Ports to expose (e.g., \"3000\")",
            ))
            .optional("destination_uuid", string(""))
            .optional("domains", string("")),
        ApplicationSource::PrivateGithubApp => application_base()
            .required("github_app_uuid", string(""))
            .merge(git_source("", "")),
        ApplicationSource::PrivateDeployKey => application_base()
            .required("private_key_uuid", string(""))
            .merge(git_source("", "")),
        ApplicationSource::Dockerfile => application_base()
            .required("dockerfile", string("Dockerfile content"))
            .optional("ports_exposes", string(""))
            .optional("domains", string("")),
        ApplicationSource::DockerImage => application_base()
            .required(
                "docker_registry_image_name",
                string("Docker image name (e.g., nginx:latest)"),
            )
            .required("ports_exposes", string(""))
            .optional("docker_registry_image_tag", string(""))
            .optional("domains", string("")),
        ApplicationSource::DockerCompose => application_base()
            .required("docker_compose_raw", string("Docker Compose YAML content")),
    }
}

fn creation_description(source: ApplicationSource) -> &'static str {
    match source {
        ApplicationSource::PublicGit => "Create application from public git repository",
        ApplicationSource::PrivateGithubApp => {
            "Create application from private GitHub App repository"
        }
        ApplicationSource::PrivateDeployKey => {
            "Create application from private repository using deploy key"
        }
        ApplicationSource::Dockerfile => "Create application from Dockerfile",
        ApplicationSource::DockerImage => "Create application from Docker image",
        ApplicationSource::DockerCompose => "Create application from Docker Compose",
    }
}

fn application_tools() -> Vec<ToolDef> {
    let mut tools = vec![
        ToolDef::new("list_applications", "List all applications", FieldSet::new()).sanitized(),
        ToolDef::new("get_application", "Get application details", schema::uuid("")).sanitized(),
    ];
    tools.extend(ApplicationSource::ALL.into_iter().map(|source| {
        ToolDef::new(
            source.tool_name(),
            creation_description(source),
            creation_fields(source),
        )
    }));
    tools.extend([
        ToolDef::new(
            "update_application",
            "Update an application",
            schema::uuid("")
                .optional("name", string(""))
                .optional("description", string(""))
                .optional("domains", string(""))
                .optional("git_repository", string(""))
                .optional("git_branch", string(""))
                .optional("build_pack", build_pack())
                .optional("install_command", string(""))
                .optional("build_command", string(""))
                .optional("start_command", string(""))
                .optional("ports_exposes", string(""))
                .optional("base_directory", string(""))
                .optional("publish_directory", string(""))
                .optional("dockerfile", string(""))
                .optional("docker_compose_raw", string(""))
                .optional("instant_deploy", boolean("")),
        ),
        ToolDef::new(
            "delete_application",
            "Delete an application",
            schema::uuid("").merge(delete_option_fields()),
        )
        .destructive(),
        ToolDef::new(
            "start_application",
            "Start an application",
            schema::uuid("")
                .optional("force", boolean("Force rebuild"))
                .optional("instant_deploy", boolean("Skip queuing")),
        ),
        ToolDef::new("stop_application", "Stop an application", schema::uuid("")),
        ToolDef::new("restart_application", "Restart an application", schema::uuid("")),
        ToolDef::new("deploy_application", "Deploy an application", schema::uuid("")),
        ToolDef::new(
            "get_application_logs",
            "Get application logs",
            schema::uuid("Application UUID"),
        )
        .sanitized(),
        ToolDef::new(
            "execute_application_command",
            "Execute a command in application container",
            schema::uuid("").required("command", string("Command to execute")),
        )
        .sanitized(),
    ]);
    tools
}

#[async_trait::async_trait]
impl ToolHandler for ApplicationManager {
    fn tools(&self) -> Vec<ToolDef> {
        application_tools()
    }

    async fn handle(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError> {
        self.handle_action(tool, args).await
    }
}
