//! Test doubles for the chat platform
//!
//! `RecordingPlatform` keeps every call it receives so tests can assert on the
//! side effects of a decision.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use pin_core::traits::{ChatPlatform, PlatformError, PlatformResult};
use pin_core::{ChannelRef, Embed, MessageRef, Snowflake};

/// A call received by the recording platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Pin(Snowflake),
    Unpin(Snowflake),
    RemoveReaction {
        message_id: Snowflake,
        emoji: String,
        user_id: Snowflake,
    },
    SendEmbed {
        channel_id: Snowflake,
        embed: Embed,
    },
    DeleteMessage(Snowflake),
}

/// In-process `ChatPlatform` that records calls instead of performing them
#[derive(Debug)]
pub struct RecordingPlatform {
    calls: Mutex<Vec<PlatformCall>>,
    channels: Mutex<HashMap<Snowflake, ChannelRef>>,
    pin_error: Mutex<Option<PlatformError>>,
    next_message_id: AtomicI64,
}

impl Default for RecordingPlatform {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            channels: Mutex::new(HashMap::new()),
            pin_error: Mutex::new(None),
            next_message_id: AtomicI64::new(1_000_000),
        }
    }
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a live channel resolvable through `find_channel`
    pub fn add_channel(&self, channel: ChannelRef) {
        self.channels.lock().insert(channel.id, channel);
    }

    /// Simulate deleting a channel
    pub fn remove_channel(&self, channel_id: Snowflake) {
        self.channels.lock().remove(&channel_id);
    }

    /// Make every following pin attempt fail with `error`
    pub fn fail_pins_with(&self, error: PlatformError) {
        *self.pin_error.lock() = Some(error);
    }

    /// Snapshot of every recorded call, in order
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    /// Embeds posted to a channel
    pub fn embeds_in(&self, channel_id: Snowflake) -> Vec<Embed> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                PlatformCall::SendEmbed { channel_id: c, embed } if *c == channel_id => {
                    Some(embed.clone())
                }
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl ChatPlatform for RecordingPlatform {
    async fn pin_message(&self, message: &MessageRef) -> PlatformResult<()> {
        if let Some(error) = self.pin_error.lock().clone() {
            return Err(error);
        }
        self.record(PlatformCall::Pin(message.id));
        Ok(())
    }

    async fn unpin_message(&self, message: &MessageRef) -> PlatformResult<()> {
        self.record(PlatformCall::Unpin(message.id));
        Ok(())
    }

    async fn remove_reaction(
        &self,
        message: &MessageRef,
        emoji: &str,
        user_id: Snowflake,
    ) -> PlatformResult<()> {
        self.record(PlatformCall::RemoveReaction {
            message_id: message.id,
            emoji: emoji.to_string(),
            user_id,
        });
        Ok(())
    }

    async fn send_embed(&self, channel_id: Snowflake, embed: &Embed) -> PlatformResult<Snowflake> {
        self.record(PlatformCall::SendEmbed {
            channel_id,
            embed: embed.clone(),
        });
        Ok(Snowflake::new(
            self.next_message_id.fetch_add(1, Ordering::Relaxed),
        ))
    }

    async fn delete_message(&self, message: &MessageRef) -> PlatformResult<()> {
        self.record(PlatformCall::DeleteMessage(message.id));
        Ok(())
    }

    async fn find_channel(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> PlatformResult<Option<ChannelRef>> {
        Ok(self
            .channels
            .lock()
            .get(&channel_id)
            .filter(|channel| channel.belongs_to(guild_id))
            .cloned())
    }
}

#[cfg(test)]
pub(crate) use fixtures::*;
