//! Redis Pub/Sub event subscriber.
//!
//! Subscribes to the events channel and hands every decoded event to the
//! dispatcher. Reconnects after a delay when the connection drops; events
//! published in the meantime are lost.

use futures_util::StreamExt;
use redis::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use pin_common::RedisConfig;

use super::dispatcher::EventDispatcher;
use super::events::PlatformEvent;

/// Error type for subscriber operations
#[derive(Debug, thiserror::Error)]
pub enum SubscriberError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Result type for subscriber operations
pub type SubscriberResult<T> = Result<T, SubscriberError>;

/// Subscriber configuration
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    /// Redis connection URL
    pub redis_url: String,
    /// Channel carrying platform events
    pub channel: String,
    /// Reconnection delay in milliseconds
    pub reconnect_delay_ms: u64,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://127.0.0.1:6379".to_string(),
            channel: "reactionpin:events".to_string(),
            reconnect_delay_ms: 1000,
        }
    }
}

impl From<&RedisConfig> for SubscriberConfig {
    fn from(config: &RedisConfig) -> Self {
        Self {
            redis_url: config.url.clone(),
            channel: config.events_channel.clone(),
            reconnect_delay_ms: config.reconnect_delay_ms,
        }
    }
}

/// Redis Pub/Sub subscriber feeding the dispatcher
pub struct EventSubscriber {
    config: SubscriberConfig,
    client: Client,
    dispatcher: Arc<EventDispatcher>,
}

impl EventSubscriber {
    /// Validate the Redis URL; no connection is made yet
    pub fn new(config: SubscriberConfig, dispatcher: Arc<EventDispatcher>) -> SubscriberResult<Self> {
        let client = Client::open(config.redis_url.as_str())?;
        Ok(Self {
            config,
            client,
            dispatcher,
        })
    }

    /// Client for health checks
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Run until `shutdown` flips to true
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let delay = Duration::from_millis(self.config.reconnect_delay_ms);
        loop {
            tokio::select! {
                result = self.listen() => match result {
                    Ok(()) => tracing::warn!("Pub/Sub stream ended, reconnecting..."),
                    Err(e) => tracing::error!(error = %e, "Subscriber error, reconnecting..."),
                },
                _ = shutdown.changed() => break,
            }

            tokio::select! {
                () = tokio::time::sleep(delay) => {}
                _ = shutdown.changed() => break,
            }
        }
        tracing::info!("Subscriber shutting down");
    }

    /// Listen until the stream ends or errors
    async fn listen(&self) -> SubscriberResult<()> {
        let mut pubsub = self.client.get_async_pubsub().await?;
        pubsub.subscribe(&self.config.channel).await?;
        tracing::info!(channel = %self.config.channel, "Subscriber connected to Redis");

        let mut stream = pubsub.on_message();
        while let Some(msg) = stream.next().await {
            let payload: String = match msg.get_payload() {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::warn!(error = %e, "Dropping non-text Pub/Sub message");
                    continue;
                }
            };
            self.handle_payload(&payload);
        }
        Ok(())
    }

    fn handle_payload(&self, payload: &str) {
        match PlatformEvent::decode(payload) {
            Ok(Some(event)) => {
                tracing::trace!(event_type = %event.event_type(), "Dispatching event");
                drop(self.dispatcher.spawn(event));
            }
            Ok(None) => tracing::trace!("Ignoring unhandled event type"),
            Err(e) => tracing::warn!(error = %e, "Dropping malformed event"),
        }
    }
}

/// Ping the event bus
pub async fn ping(client: &Client) -> SubscriberResult<()> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    redis::cmd("PING").query_async::<String>(&mut conn).await?;
    Ok(())
}
