//! Command API integration tests
//!
//! Runs the command and health server over in-memory stores and a
//! recording platform; no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use pin_core::{AuditAction, ChannelRef, Snowflake};
use reqwest::StatusCode;
use serde_json::Value;

fn description(body: &Value) -> &str {
    body["embed"]["description"].as_str().unwrap_or_default()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready_without_event_bus() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["checks"]["storage"], "healthy");
    assert_eq!(body["checks"]["event_bus"], "unhealthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Whitelist Command Tests
// ============================================================================

#[tokio::test]
async fn test_whitelist_lifecycle() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .platform
        .add_channel(ChannelRef::new(Snowflake::new(20), GUILD_ID, "pins"));

    // Empty list is its own reply
    let response = server.command(&CommandBody::rp(Member::admin(1), &["list"])).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(description(&body), "No channels have been whitelisted yet.");

    let response = server
        .command(&CommandBody::rp(Member::admin(1), &["add", "<#20>"]))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["embed"]["title"], "ReactionPin");
    assert_eq!(description(&body), "Channel has been whitelisted.");

    let response = server.command(&CommandBody::rp(Member::admin(1), &["?"])).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        description(&body),
        "Whitelisted channels:\n:small_orange_diamond: <#20>"
    );

    let response = server
        .command(&CommandBody::rp(Member::admin(1), &["del", "20"]))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(description(&body), "Channel has been removed from the whitelist.");

    // Both changes reached the changelog channel
    let changelog = server.platform.embeds_in(CHANGELOG_ID);
    assert_eq!(changelog.len(), 2);
    assert_eq!(
        changelog[0].description.as_deref(),
        Some("Channel <#20> has been whitelisted for ReactionPin.")
    );
    let actions: Vec<AuditAction> = server
        .ctx
        .audit_repo()
        .list_by_guild(GUILD_ID, 10)
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.action)
        .collect();
    assert_eq!(actions, vec![AuditAction::ChannelRemoved, AuditAction::ChannelWhitelisted]);
}

#[tokio::test]
async fn test_add_twice_conflicts() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .platform
        .add_channel(ChannelRef::new(Snowflake::new(20), GUILD_ID, "pins"));
    let add = CommandBody::rp(Member::admin(1), &["add", "20"]);

    assert_status(server.command(&add).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();

    let response = server.command(&add).await.unwrap();
    let body: Value = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body["error"]["code"], "ALREADY_WHITELISTED");
    assert_eq!(description(&body), "Channel is already whitelisted.");
    assert_eq!(server.platform.embeds_in(CHANGELOG_ID).len(), 1);
}

#[tokio::test]
async fn test_remove_never_added() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .command(&CommandBody::rp(Member::admin(1), &["remove", "<#20>"]))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_WHITELISTED");
    assert!(server.platform.calls().is_empty());
}

#[tokio::test]
async fn test_add_unknown_channel() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .command(&CommandBody::rp(Member::admin(1), &["add", "<#404>"]))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
    assert_eq!(description(&body), "Channel `404` could not be found.");
}

// ============================================================================
// Pin Notification Command Tests
// ============================================================================

#[tokio::test]
async fn test_pin_message_toggle() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.command(&CommandBody::rp(Member::admin(1), &["pm"])).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(description(&body).contains("currently **enabled**"));

    let response = server
        .command(&CommandBody::rp(Member::admin(1), &["pin_message", "off"]))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(description(&body).contains("have been **disabled**"));

    let response = server.command(&CommandBody::rp(Member::admin(1), &["pm"])).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(description(&body).contains("currently **disabled**"));
}

#[tokio::test]
async fn test_pin_message_invalid_value() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .command(&CommandBody::rp(Member::admin(1), &["pm", "sometimes"]))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(description(&body), "`sometimes` is not a valid yes/no value.");
}

// ============================================================================
// Authorization and Input Tests
// ============================================================================

#[tokio::test]
async fn test_missing_capability() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Pin access alone does not grant administration
    let response = server
        .command(&CommandBody::rp(Member::moderator(2), &["list"]))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["error"]["code"], "MISSING_CAPABILITY");
    assert!(body["embed"]["color"].is_number());
}

#[tokio::test]
async fn test_direct_message_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .command(&CommandBody::rp(Member::admin(1), &["list"]).in_dm())
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_IN_GUILD");
    assert_eq!(description(&body), "This command can only be used in a server.");
}

#[tokio::test]
async fn test_unknown_subcommand() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .command(&CommandBody::rp(Member::admin(1), &["purge"]))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(description(&body), "Unknown subcommand `purge`.");
}

#[tokio::test]
async fn test_malformed_body() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .command(&serde_json::json!({ "command": "rp list" }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_BODY");
    assert!(body.get("embed").is_none());
}
