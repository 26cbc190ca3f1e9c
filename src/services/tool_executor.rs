use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::errors::ToolError;
use crate::mcp::catalog::{ToolCatalog, ToolDef};
use crate::services::logger::Logger;
use crate::services::security::{ensure_confirmed, strip_confirmation};
use crate::services::validation::ToolArgs;
use crate::utils::sanitize::sanitize_output;
use crate::utils::tool_errors::unknown_tool_error;

/// A resource-family manager: declares its tools and serves calls to them.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    fn tools(&self) -> Vec<ToolDef>;

    async fn handle(&self, tool: &str, args: ToolArgs) -> Result<Value, ToolError>;
}

/// Routes tool calls to their handlers and applies the per-tool policy:
/// schema validation, confirmation of destructive calls, output
/// sanitization and rendering.
pub struct ToolExecutor {
    logger: Logger,
    catalog: ToolCatalog,
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
}

impl ToolExecutor {
    pub fn new(logger: Logger, handlers: Vec<Arc<dyn ToolHandler>>) -> Result<Self, ToolError> {
        let mut tools = Vec::new();
        let mut routes: HashMap<String, Arc<dyn ToolHandler>> = HashMap::new();
        for handler in handlers {
            for tool in handler.tools() {
                routes.insert(tool.name.clone(), handler.clone());
                tools.push(tool);
            }
        }
        let catalog = ToolCatalog::new(tools)?;
        Ok(Self {
            logger: logger.child("executor"),
            catalog,
            handlers: routes,
        })
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Runs one tool call and returns the MCP result,
    /// `{ content: [{ type: "text", text }] }`.
    pub async fn execute(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        let started = Instant::now();
        let result = self.dispatch(tool, args).await;
        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => self.logger.debug(
                "tool call succeeded",
                Some(&serde_json::json!({ "tool": tool, "duration_ms": duration_ms })),
            ),
            Err(err) => self.logger.warn(
                "tool call failed",
                Some(&serde_json::json!({
                    "tool": tool,
                    "kind": err.kind,
                    "code": err.code,
                    "duration_ms": duration_ms,
                })),
            ),
        }
        result
    }

    async fn dispatch(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        let (Some(def), Some(handler)) = (self.catalog.get(tool), self.handlers.get(tool)) else {
            return Err(unknown_tool_error(tool, &self.catalog.names()));
        };
        let mut args = if args.is_null() {
            Value::Object(Default::default())
        } else {
            args
        };
        let dropped = self.catalog.drop_unknown_fields(tool, &mut args);
        if !dropped.is_empty() {
            self.logger.warn(
                "ignored unknown arguments",
                Some(&serde_json::json!({ "tool": tool, "fields": dropped })),
            );
        }
        if def.policy.destructive {
            let map = args
                .as_object()
                .ok_or_else(|| ToolError::invalid_params("Tool arguments must be an object"))?;
            ensure_confirmed(tool, map)?;
        }
        self.catalog.validate_args(tool, &args)?;
        if def.policy.destructive {
            if let Some(map) = args.as_object_mut() {
                strip_confirmation(map);
            }
        }

        let mut result = handler.handle(tool, ToolArgs::new(args)?).await?;
        if def.policy.sanitize_output {
            result = sanitize_output(result);
        }
        let text = if def.policy.pretty {
            serde_json::to_string_pretty(&result)
        } else {
            serde_json::to_string(&result)
        }
        .map_err(|err| ToolError::internal(format!("Failed to render result: {}", err)))?;

        Ok(serde_json::json!({
            "content": [ { "type": "text", "text": text } ]
        }))
    }
}
