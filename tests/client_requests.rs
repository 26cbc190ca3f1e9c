mod common;
use common::{client_for, unreachable_base_url, StubServer, TOKEN};

use coolify_mcp::errors::ClientError;
use coolify_mcp::types::{DatabaseEngine, DeleteOptions, DeployOptions, EnvScope, StartOptions};
use serde_json::{json, Map, Value};

#[tokio::test]
async fn delete_without_flags_sends_no_query() {
    let stub = StubServer::fixed(200, r#"{"message":"Deletion request queued."}"#).await;
    let result = stub
        .client()
        .delete_application("abc", &DeleteOptions::default())
        .await
        .expect("delete");
    assert_eq!(result["message"], "Deletion request queued.");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].target, "/api/v1/applications/abc");
}

#[tokio::test]
async fn delete_flags_become_query_parameters() {
    let stub = StubServer::fixed(200, r#"{"message":"ok"}"#).await;
    let options = DeleteOptions {
        delete_volumes: Some(true),
        ..Default::default()
    };
    stub.client()
        .delete_application("abc", &options)
        .await
        .expect("delete");
    assert_eq!(
        stub.requests()[0].target,
        "/api/v1/applications/abc?delete_volumes=true"
    );
}

#[tokio::test]
async fn false_flags_are_sent_explicitly() {
    let stub = StubServer::fixed(200, r#"{"message":"ok"}"#).await;
    let options = DeleteOptions {
        delete_configurations: Some(false),
        docker_cleanup: Some(true),
        ..Default::default()
    };
    stub.client()
        .delete_service("svc", &options)
        .await
        .expect("delete");
    assert_eq!(
        stub.requests()[0].query(),
        Some("delete_configurations=false&docker_cleanup=true")
    );
}

#[tokio::test]
async fn requests_carry_bearer_token_and_json_content_type() {
    let stub = StubServer::fixed(200, "[]").await;
    stub.client().list_servers().await.expect("list");
    let request = &stub.requests()[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.path(), "/api/v1/servers");
    assert_eq!(
        request.headers.get("authorization").map(String::as_str),
        Some(format!("Bearer {}", TOKEN).as_str())
    );
    assert_eq!(
        request.headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
}

#[tokio::test]
async fn identifiers_are_percent_encoded_as_one_segment() {
    let stub = StubServer::fixed(200, "{}").await;
    stub.client()
        .get_project_environment("p1", "staging/eu west")
        .await
        .expect("get");
    assert_eq!(
        stub.requests()[0].target,
        "/api/v1/projects/p1/staging%2Feu%20west"
    );
}

#[tokio::test]
async fn api_errors_use_the_body_message_verbatim() {
    let stub = StubServer::fixed(
        404,
        r#"{"error":"x","status":404,"message":"Not found"}"#,
    )
    .await;
    let err = stub.client().get_server("missing").await.expect_err("404");
    assert_eq!(err.to_string(), "Not found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn api_errors_without_a_message_are_synthesized() {
    let stub = StubServer::fixed(503, r#"{"error":"down"}"#).await;
    let err = stub.client().list_projects().await.expect_err("503");
    assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
}

#[tokio::test]
async fn undecodable_bodies_are_malformed_responses() {
    let stub = StubServer::fixed(200, "<html>proxy page</html>").await;
    let err = stub.client().list_teams().await.expect_err("decode");
    assert!(matches!(err, ClientError::Decode { status: 200, .. }));
}

#[tokio::test]
async fn version_accepts_a_plain_text_body() {
    let stub = StubServer::fixed(200, "4.0.0-beta.380\n").await;
    let version = stub.client().get_version().await.expect("version");
    assert_eq!(version, Value::String("4.0.0-beta.380".to_string()));
    assert_eq!(stub.requests()[0].path(), "/api/v1/version");
}

#[tokio::test]
async fn unreachable_server_names_the_base_url() {
    let base_url = unreachable_base_url().await;
    let err = client_for(&base_url)
        .list_servers()
        .await
        .expect_err("connection refused");
    assert!(err.is_connection());
    assert!(err.to_string().contains(&base_url), "{}", err);
}

#[tokio::test]
async fn validation_failure_is_prefixed() {
    let stub = StubServer::fixed(401, r#"{"message":"Unauthenticated."}"#).await;
    let err = stub
        .client()
        .validate_connection()
        .await
        .expect_err("unauthenticated");
    assert_eq!(
        err.to_string(),
        "Failed to connect to Coolify server: Unauthenticated."
    );
}

#[tokio::test]
async fn start_options_only_send_enabled_flags() {
    let stub = StubServer::fixed(200, r#"{"message":"Deployment queued."}"#).await;
    let client = stub.client();
    client
        .start_application("app", &StartOptions::default())
        .await
        .expect("start");
    client
        .start_application(
            "app",
            &StartOptions {
                force: true,
                instant_deploy: false,
            },
        )
        .await
        .expect("start");
    let requests = stub.requests();
    assert_eq!(requests[0].target, "/api/v1/applications/app/start");
    assert_eq!(requests[1].target, "/api/v1/applications/app/start?force=true");
}

#[tokio::test]
async fn deploy_targets_by_tag_and_uuid() {
    let stub = StubServer::fixed(200, r#"{"deployments":[]}"#).await;
    stub.client()
        .deploy(&DeployOptions {
            tag: Some("web,api".to_string()),
            uuid: None,
            force: true,
        })
        .await
        .expect("deploy");
    let request = &stub.requests()[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.target, "/api/v1/deploy?tag=web%2Capi&force=true");
}

#[tokio::test]
async fn engine_selects_the_creation_endpoint() {
    let stub = StubServer::fixed(201, r#"{"uuid":"db1"}"#).await;
    let mut data = Map::new();
    data.insert("project_uuid".to_string(), json!("p1"));
    stub.client()
        .create_database(DatabaseEngine::Clickhouse, data)
        .await
        .expect("create");
    let request = &stub.requests()[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path(), "/api/v1/databases/clickhouse");
    assert_eq!(request.json(), json!({ "project_uuid": "p1" }));
}

#[tokio::test]
async fn bulk_env_update_wraps_items_in_data() {
    let stub = StubServer::fixed(200, r#"{"message":"ok"}"#).await;
    stub.client()
        .bulk_update_envs(
            EnvScope::Service,
            "svc",
            vec![json!({ "key": "A", "value": "1" })],
        )
        .await
        .expect("bulk");
    let request = &stub.requests()[0];
    assert_eq!(request.method, "PATCH");
    assert_eq!(request.path(), "/api/v1/services/svc/envs/bulk");
    assert_eq!(request.json(), json!({ "data": [{ "key": "A", "value": "1" }] }));
}
