use crate::app::App;
use crate::config::CoolifyConfig;
use crate::constants::server::{NAME, PROTOCOL_VERSION, VERSION};
use crate::errors::{ErrorCode, McpError, ToolError, ToolErrorKind};
use crate::mcp::protocol::{JsonRpcRequest, JsonRpcResponse};
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolExecutor;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};

/// Startup progression. Each state is entered at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Uninitialized,
    Validated,
    Ready,
}

fn map_tool_error(tool: &str, error: &ToolError) -> McpError {
    let code = match error.kind {
        ToolErrorKind::InvalidParams => ErrorCode::InvalidParams,
        ToolErrorKind::Denied | ToolErrorKind::Conflict | ToolErrorKind::NotFound => {
            ErrorCode::InvalidRequest
        }
        _ => ErrorCode::InternalError,
    };
    let mut data = json!({
        "tool": tool,
        "kind": error.kind,
        "code": error.code,
    });
    if let Some(obj) = data.as_object_mut() {
        if let Some(hint) = &error.hint {
            obj.insert("hint".to_string(), Value::String(hint.clone()));
        }
        if let Some(details) = &error.details {
            obj.insert("details".to_string(), details.clone());
        }
    }
    McpError::new(code, error.message.clone()).with_data(data)
}

pub struct McpServer {
    app: App,
    logger: Logger,
    state: ServerState,
    executor: Option<ToolExecutor>,
}

impl McpServer {
    pub fn new(app: App) -> Self {
        let logger = app.logger.child("server");
        Self {
            app,
            logger,
            state: ServerState::Uninitialized,
            executor: None,
        }
    }

    pub fn state(&self) -> ServerState {
        self.state
    }

    pub fn tool_count(&self) -> usize {
        self.executor
            .as_ref()
            .map(|executor| executor.catalog().len())
            .unwrap_or(0)
    }

    /// Checks that the service is reachable with the configured token.
    /// On failure the server stays uninitialized.
    pub async fn validate(&mut self) -> Result<(), ToolError> {
        if self.state != ServerState::Uninitialized {
            return Err(ToolError::internal("Connection has already been validated"));
        }
        self.logger.info("Validating connection...", None);
        self.app.client.validate_connection().await?;
        self.state = ServerState::Validated;
        Ok(())
    }

    pub fn register_tools(&mut self) -> Result<(), ToolError> {
        if self.executor.is_some() {
            return Err(ToolError::internal("Tools are already registered"));
        }
        if self.state != ServerState::Validated {
            return Err(ToolError::internal(
                "Connection must be validated before tools are registered",
            ));
        }
        let executor = self.app.tool_executor()?;
        self.logger.debug(
            "tools registered",
            Some(&json!({ "count": executor.catalog().len() })),
        );
        self.executor = Some(executor);
        Ok(())
    }

    /// Validates, registers every tool and then serves `reader`/`writer`
    /// until EOF.
    pub async fn connect<R, W>(&mut self, reader: R, writer: W) -> Result<(), ToolError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.logger.info(
            "Starting server...",
            Some(&json!({ "base_url": self.app.client.base_url() })),
        );
        if let Err(err) = self.validate().await {
            self.logger.error(
                "Failed to start server",
                Some(&json!({ "error": err.message })),
            );
            return Err(err);
        }
        self.register_tools()?;
        self.state = ServerState::Ready;
        self.logger.info(
            "Server started successfully",
            Some(&json!({ "tools": self.tool_count() })),
        );
        self.serve(reader, writer).await
    }

    async fn serve<R, W>(&self, reader: R, writer: W) -> Result<(), ToolError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = BufReader::new(reader);
        let mut writer = BufWriter::new(writer);
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer).await? == 0 {
                break;
            }
            // A line that is not UTF-8 cannot be JSON; answer it and keep going.
            let response = match std::str::from_utf8(&buffer) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line.trim()).await,
                Err(_) => Some(JsonRpcResponse::failure(
                    Value::Null,
                    ErrorCode::ParseError,
                    "Parse error",
                )),
            };
            if let Some(response) = response {
                let payload = serde_json::to_string(&response).unwrap_or_default();
                writer.write_all(payload.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }

        self.logger.info("stdin closed, shutting down", None);
        Ok(())
    }

    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let parsed: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(_) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    ErrorCode::ParseError,
                    "Parse error",
                ))
            }
        };
        let request: JsonRpcRequest = match serde_json::from_value(parsed) {
            Ok(request) => request,
            Err(_) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    ErrorCode::InvalidRequest,
                    "Invalid request",
                ))
            }
        };
        self.handle_request(request).await
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() || request.method.starts_with("notifications/") {
            return None;
        }
        let id = request.id.unwrap_or(Value::Null);
        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.handle_initialize()),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(id, self.handle_tools_list()),
            "tools/call" => {
                let params = request.params.as_object().cloned().unwrap_or_default();
                let name = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
                if name.is_empty() {
                    JsonRpcResponse::failure(id, ErrorCode::InvalidParams, "Missing tool name")
                } else {
                    let args = params.get("arguments").cloned().unwrap_or(Value::Null);
                    match self.handle_tools_call(name, args).await {
                        Ok(result) => JsonRpcResponse::success(id, result),
                        Err(err) => JsonRpcResponse::from_error(id, err),
                    }
                }
            }
            _ => JsonRpcResponse::failure(id, ErrorCode::MethodNotFound, "Method not found"),
        };
        Some(response)
    }

    fn handle_initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": { "name": NAME, "version": VERSION },
        })
    }

    fn handle_tools_list(&self) -> Value {
        let tools = self
            .executor
            .as_ref()
            .map(|executor| executor.catalog().tools())
            .unwrap_or_default();
        json!({ "tools": tools })
    }

    async fn handle_tools_call(&self, name: &str, args: Value) -> Result<Value, McpError> {
        let Some(executor) = self.executor.as_ref() else {
            return Err(McpError::new(
                ErrorCode::InternalError,
                "Server is not ready: tools are not registered",
            ));
        };
        executor
            .execute(name, args)
            .await
            .map_err(|err| map_tool_error(name, &err))
    }
}

pub async fn run_stdio(config: CoolifyConfig, logger: Logger) -> Result<(), ToolError> {
    let app = App::initialize(config, logger)?;
    let mut server = McpServer::new(app);
    server
        .connect(tokio::io::stdin(), tokio::io::stdout())
        .await
}
