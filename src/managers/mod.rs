//! One manager per Coolify resource family. Each declares its tool
//! definitions and maps tool calls onto [`crate::client::CoolifyClient`].

pub mod applications;
pub mod databases;
pub mod deployments;
pub mod env_vars;
pub mod github_apps;
pub mod keys;
pub mod projects;
pub mod servers;
pub mod services;
pub mod system;
pub mod teams;

use crate::errors::ToolError;
use crate::mcp::catalog::ToolDef;
use crate::services::validation::ToolArgs;
use crate::types::DeleteOptions;
use crate::utils::tool_errors::unknown_tool_error;

pub(crate) fn unknown_tool(tool: &str, defs: &[ToolDef]) -> ToolError {
    let names: Vec<String> = defs.iter().map(|def| def.name.clone()).collect();
    unknown_tool_error(tool, &names)
}

/// Reads the camelCase `options` object taken by `delete_database` and
/// `delete_service`.
pub(crate) fn nested_delete_options(args: &ToolArgs) -> DeleteOptions {
    let Some(options) = args.optional_object("options") else {
        return DeleteOptions::default();
    };
    let flag = |key: &str| options.get(key).and_then(|v| v.as_bool());
    DeleteOptions {
        delete_configurations: flag("deleteConfigurations"),
        delete_volumes: flag("deleteVolumes"),
        docker_cleanup: flag("dockerCleanup"),
        delete_connected_networks: flag("deleteConnectedNetworks"),
    }
}
