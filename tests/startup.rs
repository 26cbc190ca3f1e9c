mod common;
use common::{app_for, unreachable_base_url, StubServer};

use coolify_mcp::mcp::server::{McpServer, ServerState};
use serde_json::{json, Value};

fn responses(output: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("response line"))
        .collect()
}

#[tokio::test]
async fn reachable_service_reaches_ready_with_every_tool() {
    let stub = StubServer::fixed(200, "[]").await;
    let mut server = McpServer::new(stub.app());
    assert_eq!(server.state(), ServerState::Uninitialized);

    let mut output = Vec::new();
    server
        .connect(&b""[..], &mut output)
        .await
        .expect("connect");

    assert_eq!(server.state(), ServerState::Ready);
    assert_eq!(server.tool_count(), 98);
    assert!(output.is_empty());

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path(), "/api/v1/servers");
}

#[tokio::test]
async fn unreachable_service_never_becomes_ready() {
    let base_url = unreachable_base_url().await;
    let mut server = McpServer::new(app_for(&base_url));

    let mut output = Vec::new();
    let input = br#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#;
    let err = server
        .connect(&input[..], &mut output)
        .await
        .expect_err("unreachable");

    assert!(err.message.starts_with("Failed to connect to Coolify server"), "{}", err);
    assert!(err.message.contains(&base_url), "{}", err);
    assert_eq!(server.state(), ServerState::Uninitialized);
    assert_eq!(server.tool_count(), 0);
    assert!(output.is_empty(), "stdio must not be served");
}

#[tokio::test]
async fn tools_register_only_once() {
    let stub = StubServer::fixed(200, "[]").await;
    let mut server = McpServer::new(stub.app());
    assert!(server.register_tools().is_err(), "registration before validation");

    server.validate().await.expect("validate");
    assert_eq!(server.state(), ServerState::Validated);
    server.register_tools().expect("first registration");
    let err = server.register_tools().expect_err("second registration");
    assert_eq!(err.message, "Tools are already registered");
}

#[tokio::test]
async fn serves_the_json_rpc_surface() {
    let stub = StubServer::start(|request| match request.path() {
        "/api/v1/servers" => (200, "[]".to_string()),
        _ => (404, r#"{"message":"Not found"}"#.to_string()),
    })
    .await;
    let mut server = McpServer::new(stub.app());

    let input = [
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/list"}"#,
        r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"get_project","arguments":{"uuid":"p9"}}}"#,
        r#"{"jsonrpc":"2.0","id":5,"method":"resources/list"}"#,
        "not json",
        r#"[1,2,3]"#,
        r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"name":"list_servers"}}"#,
    ]
    .join("\n");
    let mut output = Vec::new();
    server
        .connect(input.as_bytes(), &mut output)
        .await
        .expect("serve");

    let replies = responses(&output);
    assert_eq!(replies.len(), 8);

    assert_eq!(replies[0]["id"], json!(1));
    assert_eq!(replies[0]["result"]["protocolVersion"], "2025-06-18");
    assert_eq!(replies[0]["result"]["serverInfo"]["name"], "coolify-mcp");
    assert!(replies[0]["result"]["capabilities"]["tools"].is_object());

    assert_eq!(replies[1], json!({ "jsonrpc": "2.0", "id": 2, "result": {} }));

    let tools = replies[2]["result"]["tools"].as_array().expect("tools");
    assert_eq!(tools.len(), 98);
    assert!(tools.iter().all(|tool| tool["inputSchema"]["type"] == "object"));

    assert_eq!(replies[3]["id"], json!(4));
    assert_eq!(replies[3]["error"]["code"], json!(-32600));
    assert_eq!(replies[3]["error"]["message"], "Not found");
    assert_eq!(replies[3]["error"]["data"]["tool"], "get_project");
    assert_eq!(replies[3]["error"]["data"]["kind"], "not_found");

    assert_eq!(replies[4]["error"]["code"], json!(-32601));
    assert_eq!(replies[5]["error"]["code"], json!(-32700));
    assert_eq!(replies[5]["id"], Value::Null);
    assert_eq!(replies[6]["error"]["code"], json!(-32600));

    assert_eq!(replies[7]["id"], json!(6));
    assert_eq!(replies[7]["result"]["content"][0]["type"], "text");
    assert_eq!(replies[7]["result"]["content"][0]["text"], "[]");
}

#[tokio::test]
async fn invalid_utf8_lines_are_answered_and_serving_continues() {
    let stub = StubServer::fixed(200, "[]").await;
    let mut server = McpServer::new(stub.app());

    let mut input = Vec::new();
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"\xff\xfe\"}\n");
    input.extend_from_slice(br#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#);
    input.push(b'\n');
    let mut output = Vec::new();
    server
        .connect(&input[..], &mut output)
        .await
        .expect("serve");

    let replies = responses(&output);
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["error"]["code"], json!(-32700));
    assert_eq!(replies[0]["id"], Value::Null);
    assert_eq!(replies[1], json!({ "jsonrpc": "2.0", "id": 2, "result": {} }));
}
