//! REST platform adapter integration tests
//!
//! Drives `RestPlatform` against a local fake of the platform API and checks
//! both the requests it sends and how responses map back.
//!
//! Run with: cargo test -p integration-tests --test platform_tests

use integration_tests::{fixtures::*, FakePlatformServer, BROKEN_CHANNEL, FULL_PIN_CHANNEL, KNOWN_CHANNEL};
use pin_bot::platform::RestPlatform;
use pin_common::PlatformConfig;
use pin_core::{ChatPlatform, Embed, MessageRef, PlatformError, Snowflake, PIN_EMOJI};
use serde_json::Value;

fn platform(fake: &FakePlatformServer) -> RestPlatform {
    RestPlatform::new(&PlatformConfig {
        api_url: fake.base_url(),
        bot_token: "test-token".to_string(),
        timeout_secs: 5,
        bot_user_id: BOT_ID,
    })
    .expect("Failed to build platform client")
}

fn message_in(channel_id: i64, message_id: i64) -> MessageRef {
    MessageRef::new(
        Snowflake::new(message_id),
        Snowflake::new(channel_id),
        Some(GUILD_ID),
        Snowflake::new(5),
    )
}

fn full_pin_channel() -> i64 {
    FULL_PIN_CHANNEL.parse().expect("numeric channel id")
}

// ============================================================================
// Pins
// ============================================================================

#[tokio::test]
async fn test_pin_and_unpin_routes() {
    let fake = FakePlatformServer::start().await.expect("Failed to start fake platform");
    let platform = platform(&fake);
    let message = message_in(10, 100);

    platform.pin_message(&message).await.unwrap();
    platform.unpin_message(&message).await.unwrap();

    let requests = fake.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/v10/channels/10/pins/100");
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].path, "/api/v10/channels/10/pins/100");
}

#[tokio::test]
async fn test_pin_limit_is_recognized() {
    let fake = FakePlatformServer::start().await.expect("Failed to start fake platform");
    let platform = platform(&fake);

    let err = platform
        .pin_message(&message_in(full_pin_channel(), 100))
        .await
        .unwrap_err();
    assert!(matches!(err, PlatformError::PinLimit));
}

#[tokio::test]
async fn test_requests_are_authorized() {
    let fake = FakePlatformServer::start().await.expect("Failed to start fake platform");
    let platform = platform(&fake);

    platform.delete_message(&message_in(10, 100)).await.unwrap();

    let requests = fake.requests();
    assert_eq!(requests[0].authorization.as_deref(), Some("Bot test-token"));
    assert_eq!(requests[0].path, "/api/v10/channels/10/messages/100");
}

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_reaction_removal_encodes_emoji() {
    let fake = FakePlatformServer::start().await.expect("Failed to start fake platform");
    let platform = platform(&fake);

    platform
        .remove_reaction(&message_in(10, 100), PIN_EMOJI, Snowflake::new(5))
        .await
        .unwrap();

    let requests = fake.requests();
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(
        requests[0].path,
        "/api/v10/channels/10/messages/100/reactions/%F0%9F%93%8C/5"
    );
}

// ============================================================================
// Messages
// ============================================================================

#[tokio::test]
async fn test_send_embed_returns_message_id() {
    let fake = FakePlatformServer::start().await.expect("Failed to start fake platform");
    let platform = platform(&fake);
    let embed = Embed::error("System messages cannot be pinned.");

    let id = platform.send_embed(Snowflake::new(10), &embed).await.unwrap();
    assert_eq!(id, Snowflake::new(555));

    let requests = fake.requests();
    assert_eq!(requests[0].method, "POST");
    let body: Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(body["embeds"][0]["description"], "System messages cannot be pinned.");
    assert_eq!(body["embeds"][0]["color"], Embed::COLOUR_ERROR);
}

#[tokio::test]
async fn test_unexpected_status_is_reported() {
    let fake = FakePlatformServer::start().await.expect("Failed to start fake platform");
    let platform = platform(&fake);
    let channel_id: i64 = BROKEN_CHANNEL.parse().unwrap();

    let err = platform
        .find_channel(GUILD_ID, Snowflake::new(channel_id))
        .await
        .unwrap_err();
    match err {
        PlatformError::Http { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Channels
// ============================================================================

#[tokio::test]
async fn test_find_channel_in_guild() {
    let fake = FakePlatformServer::start().await.expect("Failed to start fake platform");
    let platform = platform(&fake);
    let channel_id: i64 = KNOWN_CHANNEL.parse().unwrap();

    let channel = platform
        .find_channel(GUILD_ID, Snowflake::new(channel_id))
        .await
        .unwrap()
        .expect("channel should resolve");
    assert_eq!(channel.id, Snowflake::new(channel_id));
    assert_eq!(channel.name.as_deref(), Some("general"));
    assert_eq!(channel.mention(), "<#10>");
}

#[tokio::test]
async fn test_find_channel_in_other_guild() {
    let fake = FakePlatformServer::start().await.expect("Failed to start fake platform");
    let platform = platform(&fake);

    let channel = platform
        .find_channel(Snowflake::new(2), Snowflake::new(10))
        .await
        .unwrap();
    assert!(channel.is_none());
}

#[tokio::test]
async fn test_find_unknown_channel() {
    let fake = FakePlatformServer::start().await.expect("Failed to start fake platform");
    let platform = platform(&fake);

    let channel = platform
        .find_channel(GUILD_ID, Snowflake::new(404))
        .await
        .unwrap();
    assert!(channel.is_none());
    assert_eq!(fake.requests()[0].path, "/api/v10/channels/404");
}
