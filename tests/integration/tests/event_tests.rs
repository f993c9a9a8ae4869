//! Event path integration tests
//!
//! Raw platform envelopes go through decoding, the listener chain and the
//! pin controller; side effects are read back from the recording platform.
//!
//! Run with: cargo test -p integration-tests --test event_tests

use integration_tests::{assert_status, fixtures::*, TestServer};
use pin_bot::intake::{PlatformEvent, Propagation};
use pin_core::{PlatformError, Snowflake, PIN_EMOJI};
use pin_service::testing::PlatformCall;
use pin_service::SettingsService;
use reqwest::StatusCode;

const CHANNEL: i64 = 10;
const WHITELISTED: i64 = 20;
const AUTHOR: i64 = 5;
const OTHER: i64 = 6;
const MUTE_ROLE: i64 = 42;

fn removed_reaction(message_id: i64, user_id: i64) -> PlatformCall {
    PlatformCall::RemoveReaction {
        message_id: Snowflake::new(message_id),
        emoji: PIN_EMOJI.to_string(),
        user_id: Snowflake::new(user_id),
    }
}

async fn whitelist(server: &TestServer, channel_id: i64) {
    server
        .ctx
        .whitelist_repo()
        .create(Snowflake::new(channel_id))
        .await
        .expect("Failed to whitelist channel");
}

// ============================================================================
// Reaction Added
// ============================================================================

#[tokio::test]
async fn test_self_pin_outside_whitelist() {
    let server = TestServer::start().await.expect("Failed to start server");
    let event = pin_added(message(100, CHANNEL, AUTHOR), &Member::regular(AUTHOR));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Stop);
    assert_eq!(server.platform.calls(), vec![PlatformCall::Pin(Snowflake::new(100))]);
}

#[tokio::test]
async fn test_other_member_outside_whitelist_is_not_seen() {
    let server = TestServer::start().await.expect("Failed to start server");
    let event = pin_added(message(100, CHANNEL, AUTHOR), &Member::regular(OTHER));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Continue);
    assert!(server.platform.calls().is_empty());
}

#[tokio::test]
async fn test_other_member_in_whitelisted_channel_is_refused_silently() {
    let server = TestServer::start().await.expect("Failed to start server");
    whitelist(&server, WHITELISTED).await;
    let event = pin_added(message(100, WHITELISTED, AUTHOR), &Member::regular(OTHER));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Stop);
    assert_eq!(server.platform.calls(), vec![removed_reaction(100, OTHER)]);
}

#[tokio::test]
async fn test_moderator_pins_anywhere() {
    let server = TestServer::start().await.expect("Failed to start server");
    let event = pin_added(message(100, CHANNEL, AUTHOR), &Member::moderator(OTHER));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Stop);
    assert_eq!(server.platform.calls(), vec![PlatformCall::Pin(Snowflake::new(100))]);
}

#[tokio::test]
async fn test_platform_permission_field_is_read_as_is() {
    let server = TestServer::start().await.expect("Failed to start server");

    // PRIORITY_SPEAKER alone is no moderation right
    let mut speaker = Member::regular(OTHER);
    speaker.permissions = "256".to_string();
    let event = pin_added(message(100, CHANNEL, AUTHOR), &speaker);
    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Continue);
    assert!(server.platform.calls().is_empty());

    // A moderator's full field, MANAGE_MESSAGES among ordinary member bits
    let mut moderator = Member::regular(OTHER);
    moderator.permissions = "3272000".to_string();
    let event = pin_added(message(101, CHANNEL, AUTHOR), &moderator);
    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Stop);
    assert_eq!(server.platform.calls(), vec![PlatformCall::Pin(Snowflake::new(101))]);
}

#[tokio::test]
async fn test_muted_author_is_refused_silently() {
    let server = TestServer::start().await.expect("Failed to start server");
    SettingsService::new(&server.ctx)
        .set_mute_role(Some(Snowflake::new(MUTE_ROLE)))
        .await
        .unwrap();
    let muted = Member::regular(AUTHOR).with_role(MUTE_ROLE);
    let event = pin_added(message(100, CHANNEL, AUTHOR), &muted);

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Stop);
    assert_eq!(server.platform.calls(), vec![removed_reaction(100, AUTHOR)]);
}

#[tokio::test]
async fn test_mute_role_does_not_bind_moderators() {
    let server = TestServer::start().await.expect("Failed to start server");
    SettingsService::new(&server.ctx)
        .set_mute_role(Some(Snowflake::new(MUTE_ROLE)))
        .await
        .unwrap();
    let muted = Member::moderator(AUTHOR).with_role(MUTE_ROLE);
    let event = pin_added(message(100, CHANNEL, AUTHOR), &muted);

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Stop);
    assert_eq!(server.platform.calls(), vec![PlatformCall::Pin(Snowflake::new(100))]);
}

#[tokio::test]
async fn test_system_message_is_rejected_with_notice() {
    let server = TestServer::start().await.expect("Failed to start server");
    let event = pin_added(with_type(message(100, CHANNEL, AUTHOR), 7), &Member::regular(AUTHOR));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Stop);
    let calls = server.platform.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], removed_reaction(100, AUTHOR));

    let notices = server.platform.embeds_in(Snowflake::new(CHANNEL));
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());
    assert_eq!(
        notices[0].description.as_deref(),
        Some("System messages cannot be pinned.")
    );
}

#[tokio::test]
async fn test_reply_is_pinnable_unlike_other_non_default_types() {
    let server = TestServer::start().await.expect("Failed to start server");
    let event = pin_added(with_type(message(100, CHANNEL, AUTHOR), 19), &Member::regular(AUTHOR));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Stop);
    assert_eq!(server.platform.calls(), vec![PlatformCall::Pin(Snowflake::new(100))]);
}

#[tokio::test]
async fn test_full_channel_is_rejected_with_notice() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.platform.fail_pins_with(PlatformError::PinLimit);
    let event = pin_added(message(100, CHANNEL, AUTHOR), &Member::regular(AUTHOR));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Stop);
    assert_eq!(server.platform.calls()[0], removed_reaction(100, AUTHOR));
    let notices = server.platform.embeds_in(Snowflake::new(CHANNEL));
    assert_eq!(
        notices[0].description.as_deref(),
        Some("Message could not be pinned, because the pin limit of this channel has been reached.")
    );
}

#[tokio::test]
async fn test_other_emoji_passes_through() {
    let server = TestServer::start().await.expect("Failed to start server");
    let event = reaction_added("\u{1f44d}", message(100, CHANNEL, AUTHOR), &Member::moderator(AUTHOR));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Continue);
    assert!(server.platform.calls().is_empty());
}

#[tokio::test]
async fn test_bot_reactions_pass_through() {
    let server = TestServer::start().await.expect("Failed to start server");
    let event = pin_added(message(100, CHANNEL, AUTHOR), &Member::bot(AUTHOR));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Continue);
    assert!(server.platform.calls().is_empty());
}

// ============================================================================
// Reaction Removed
// ============================================================================

#[tokio::test]
async fn test_author_unpins_in_whitelisted_channel() {
    let server = TestServer::start().await.expect("Failed to start server");
    whitelist(&server, WHITELISTED).await;
    let event = pin_removed(pinned(message(100, WHITELISTED, AUTHOR)), &Member::regular(AUTHOR));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Stop);
    assert_eq!(server.platform.calls(), vec![PlatformCall::Unpin(Snowflake::new(100))]);
}

#[tokio::test]
async fn test_author_keeps_pin_outside_whitelist() {
    let server = TestServer::start().await.expect("Failed to start server");
    let event = pin_removed(pinned(message(100, CHANNEL, AUTHOR)), &Member::regular(AUTHOR));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Continue);
    assert!(server.platform.calls().is_empty());
}

#[tokio::test]
async fn test_moderator_unpins_anywhere() {
    let server = TestServer::start().await.expect("Failed to start server");
    let event = pin_removed(pinned(message(100, CHANNEL, AUTHOR)), &Member::moderator(OTHER));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Stop);
    assert_eq!(server.platform.calls(), vec![PlatformCall::Unpin(Snowflake::new(100))]);
}

#[tokio::test]
async fn test_removal_from_unpinned_message_is_ignored() {
    let server = TestServer::start().await.expect("Failed to start server");
    let event = pin_removed(message(100, CHANNEL, AUTHOR), &Member::moderator(OTHER));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Continue);
    assert!(server.platform.calls().is_empty());
}

// ============================================================================
// Reactions Cleared
// ============================================================================

#[tokio::test]
async fn test_clearing_reactions_unpins() {
    let server = TestServer::start().await.expect("Failed to start server");
    let event = reactions_cleared(pinned(message(100, CHANNEL, AUTHOR)));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Stop);
    assert_eq!(server.platform.calls(), vec![PlatformCall::Unpin(Snowflake::new(100))]);
}

#[tokio::test]
async fn test_clearing_reactions_on_unpinned_message() {
    let server = TestServer::start().await.expect("Failed to start server");
    let event = reactions_cleared(message(100, CHANNEL, AUTHOR));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Stop);
    assert!(server.platform.calls().is_empty());
}

// ============================================================================
// Pin Notifications
// ============================================================================

#[tokio::test]
async fn test_pin_notification_kept_while_enabled() {
    let server = TestServer::start().await.expect("Failed to start server");
    let event = message_created(with_type(message(300, CHANNEL, BOT_ID.into_inner()), 6));

    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Continue);
    assert!(server.platform.calls().is_empty());
}

#[tokio::test]
async fn test_pin_notification_deleted_after_disabling() {
    let server = TestServer::start().await.expect("Failed to start server");
    let disable = CommandBody::rp(Member::admin(1), &["pm", "no"]);
    assert_status(server.command(&disable).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    server.platform.clear();

    let event = message_created(with_type(message(300, CHANNEL, BOT_ID.into_inner()), 6));
    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Stop);
    assert_eq!(
        server.platform.calls(),
        vec![PlatformCall::DeleteMessage(Snowflake::new(300))]
    );
}

#[tokio::test]
async fn test_other_messages_are_left_alone() {
    let server = TestServer::start().await.expect("Failed to start server");
    SettingsService::new(&server.ctx)
        .set_pin_message_enabled(false)
        .await
        .unwrap();

    // Pin notification from someone else
    let event = message_created(with_type(message(300, CHANNEL, AUTHOR), 6));
    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Continue);

    // Regular message from the bot
    let event = message_created(message(301, CHANNEL, BOT_ID.into_inner()));
    assert_eq!(server.deliver(&event).await.unwrap(), Propagation::Continue);

    assert!(server.platform.calls().is_empty());
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_unhandled_event_types_are_skipped() {
    let decoded = PlatformEvent::decode(r#"{"t": "TYPING_START", "d": {}}"#).unwrap();
    assert!(decoded.is_none());
}

#[tokio::test]
async fn test_spawned_dispatch_reports_propagation() {
    let server = TestServer::start().await.expect("Failed to start server");
    let raw = pin_added(message(100, CHANNEL, AUTHOR), &Member::regular(AUTHOR));
    let event = PlatformEvent::decode(&raw).unwrap().unwrap();

    let dispatcher = std::sync::Arc::new(server.dispatcher());
    let propagation = dispatcher.spawn(event).await.unwrap();
    assert_eq!(propagation, Propagation::Stop);
    assert_eq!(server.platform.calls(), vec![PlatformCall::Pin(Snowflake::new(100))]);
}
