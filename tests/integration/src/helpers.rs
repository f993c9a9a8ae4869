//! Test helpers for integration tests
//!
//! Provides utilities for spawning the command server over in-memory
//! backends, driving the event listener chain, and standing up a fake
//! platform API for the REST adapter.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode as AxumStatus, Uri},
    response::{IntoResponse, Response as AxumResponse},
    Json, Router,
};
use parking_lot::Mutex;
use pin_bot::intake::{EventDispatcher, PlatformEvent, Propagation, ReactionPinListener};
use pin_bot::server::{create_service_context, HealthTargets, Stores};
use pin_bot::{create_app, AppState};
use pin_common::{AppConfig, Translations};
use pin_service::testing::RecordingPlatform;
use pin_service::ServiceContext;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{BOT_ID, CHANGELOG_ID};

/// Configuration for the in-memory backend
pub fn test_config(platform_url: &str) -> Result<AppConfig> {
    let vars: HashMap<&str, String> = HashMap::from([
        ("STORAGE_BACKEND", "memory".to_string()),
        ("PLATFORM_API_URL", platform_url.to_string()),
        ("PLATFORM_BOT_TOKEN", "test-token".to_string()),
        ("BOT_USER_ID", BOT_ID.to_string()),
        ("CHANGELOG_CHANNEL_ID", CHANGELOG_ID.to_string()),
    ]);
    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub platform: Arc<RecordingPlatform>,
    pub ctx: Arc<ServiceContext>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a command server over in-memory stores and a recording platform
    pub async fn start() -> Result<Self> {
        let config = test_config("http://127.0.0.1:1")?;
        let stores = Stores::memory();
        let platform = Arc::new(RecordingPlatform::new());
        let ctx = Arc::new(create_service_context(
            &config,
            &stores,
            platform.clone(),
            Translations::default(),
        )?);

        let app = create_app(AppState::new(ctx.clone(), HealthTargets::default()));

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            platform,
            ctx,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Post a command invocation
    pub async fn command<T: Serialize>(&self, body: &T) -> Result<Response> {
        self.post("/api/v1/reactionpin/commands", body).await
    }

    /// Listener chain over this server's context
    pub fn dispatcher(&self) -> EventDispatcher {
        EventDispatcher::new().with_listener(Arc::new(ReactionPinListener::new(self.ctx.clone())))
    }

    /// Decode a raw envelope and run it through the listener chain
    pub async fn deliver(&self, raw: &str) -> Result<Propagation> {
        let event = PlatformEvent::decode(raw)?
            .ok_or_else(|| anyhow::anyhow!("event type is not handled: {raw}"))?;
        Ok(self.dispatcher().dispatch(&event).await)
    }
}

/// A request received by the fake platform
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Raw, still percent-encoded path
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// Channel ids the fake platform treats specially
pub const FULL_PIN_CHANNEL: &str = "999";
pub const KNOWN_CHANNEL: &str = "10";
pub const BROKEN_CHANNEL: &str = "13";

#[derive(Clone, Default)]
struct FakeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Minimal platform API that records every request
pub struct FakePlatformServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    _handle: JoinHandle<()>,
}

impl FakePlatformServer {
    pub async fn start() -> Result<Self> {
        let state = FakeState::default();
        let requests = state.requests.clone();
        let app = Router::new().fallback(fake_platform).with_state(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            requests,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api/v10", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

async fn fake_platform(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> AxumResponse {
    let path = uri.path().to_string();
    state.requests.lock().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
        body,
    });

    let segments: Vec<&str> = path
        .trim_start_matches("/api/v10/")
        .split('/')
        .collect();

    match (method.as_str(), segments.as_slice()) {
        ("PUT", ["channels", FULL_PIN_CHANNEL, "pins", _]) => (
            AxumStatus::BAD_REQUEST,
            Json(serde_json::json!({"code": 30003, "message": "Maximum number of pins reached (50)"})),
        )
            .into_response(),
        ("PUT" | "DELETE", ["channels", _, "pins", _])
        | ("DELETE", ["channels", _, "messages", _, "reactions", _, _])
        | ("DELETE", ["channels", _, "messages", _]) => AxumStatus::NO_CONTENT.into_response(),
        ("POST", ["channels", _, "messages"]) => {
            Json(serde_json::json!({"id": "555"})).into_response()
        }
        ("GET", ["channels", KNOWN_CHANNEL]) => Json(serde_json::json!({
            "id": KNOWN_CHANNEL,
            "guild_id": "1",
            "name": "general"
        }))
        .into_response(),
        ("GET", ["channels", BROKEN_CHANNEL]) => (
            AxumStatus::BAD_GATEWAY,
            Json(serde_json::json!({"code": 0, "message": "upstream unavailable"})),
        )
            .into_response(),
        ("GET", ["channels", _]) => (
            AxumStatus::NOT_FOUND,
            Json(serde_json::json!({"code": 10003, "message": "Unknown Channel"})),
        )
            .into_response(),
        _ => (
            AxumStatus::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"code": 0, "message": "boom"})),
        )
            .into_response(),
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
