//! REST adapter for the chat platform action API
//!
//! Routes follow the Discord-compatible layout; requests authenticate with
//! `Authorization: Bot <token>`.

use async_trait::async_trait;
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use pin_common::PlatformConfig;
use pin_core::traits::{ChatPlatform, PlatformError, PlatformResult};
use pin_core::{ChannelRef, Embed, MessageRef, Snowflake};

/// Platform error code for a channel that already holds the maximum number of pins
pub const PIN_LIMIT_ERROR_CODE: u32 = 30003;

/// Error body returned by the platform
#[derive(Debug, Deserialize)]
struct PlatformErrorBody {
    #[serde(default)]
    code: u32,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct CreateMessageBody<'a> {
    embeds: [&'a Embed; 1],
}

#[derive(Debug, Deserialize)]
struct CreatedMessage {
    id: Snowflake,
}

/// `ChatPlatform` over the platform's HTTP API
#[derive(Debug, Clone)]
pub struct RestPlatform {
    http: Client,
    base_url: Url,
    authorization: String,
}

impl RestPlatform {
    /// Build a client for `config.api_url`
    pub fn new(config: &PlatformConfig) -> PlatformResult<Self> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| PlatformError::Transport(format!("invalid api url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(PlatformError::Transport(format!(
                "invalid api url: {}",
                config.api_url
            )));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlatformError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            authorization: format!("Bot {}", config.bot_token),
        })
    }

    /// Base URL plus percent-encoded path segments
    fn url(&self, segments: &[&str]) -> PlatformResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| PlatformError::Transport("api url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> PlatformResult<RequestBuilder> {
        Ok(self
            .http
            .request(method, self.url(segments)?)
            .header(header::AUTHORIZATION, &self.authorization))
    }

    async fn send(request: RequestBuilder) -> PlatformResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| PlatformError::Transport(e.to_string()))?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn error_from(response: Response) -> PlatformError {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return PlatformError::NotFound;
        }

        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<PlatformErrorBody>(&text) {
            Ok(body) if body.code == PIN_LIMIT_ERROR_CODE => PlatformError::PinLimit,
            Ok(body) if !body.message.is_empty() => PlatformError::Http {
                status: status.as_u16(),
                message: body.message,
            },
            _ => PlatformError::Http {
                status: status.as_u16(),
                message: text,
            },
        }
    }
}

#[async_trait]
impl ChatPlatform for RestPlatform {
    async fn pin_message(&self, message: &MessageRef) -> PlatformResult<()> {
        let channel = message.channel_id.to_string();
        let id = message.id.to_string();
        Self::send(self.request(Method::PUT, &["channels", &channel, "pins", &id])?).await?;
        Ok(())
    }

    async fn unpin_message(&self, message: &MessageRef) -> PlatformResult<()> {
        let channel = message.channel_id.to_string();
        let id = message.id.to_string();
        Self::send(self.request(Method::DELETE, &["channels", &channel, "pins", &id])?).await?;
        Ok(())
    }

    async fn remove_reaction(
        &self,
        message: &MessageRef,
        emoji: &str,
        user_id: Snowflake,
    ) -> PlatformResult<()> {
        let channel = message.channel_id.to_string();
        let id = message.id.to_string();
        let user = user_id.to_string();
        let request = self.request(
            Method::DELETE,
            &["channels", &channel, "messages", &id, "reactions", emoji, &user],
        )?;
        Self::send(request).await?;
        Ok(())
    }

    async fn send_embed(&self, channel_id: Snowflake, embed: &Embed) -> PlatformResult<Snowflake> {
        let channel = channel_id.to_string();
        let request = self
            .request(Method::POST, &["channels", &channel, "messages"])?
            .json(&CreateMessageBody { embeds: [embed] });
        let created: CreatedMessage = Self::send(request)
            .await?
            .json()
            .await
            .map_err(|e| PlatformError::Transport(e.to_string()))?;
        Ok(created.id)
    }

    async fn delete_message(&self, message: &MessageRef) -> PlatformResult<()> {
        let channel = message.channel_id.to_string();
        let id = message.id.to_string();
        Self::send(self.request(Method::DELETE, &["channels", &channel, "messages", &id])?).await?;
        Ok(())
    }

    async fn find_channel(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> PlatformResult<Option<ChannelRef>> {
        let channel = channel_id.to_string();
        let response = match Self::send(self.request(Method::GET, &["channels", &channel])?).await {
            Ok(response) => response,
            Err(PlatformError::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };
        let channel: ChannelRef = response
            .json()
            .await
            .map_err(|e| PlatformError::Transport(e.to_string()))?;
        Ok(channel.belongs_to(guild_id).then_some(channel))
    }
}
