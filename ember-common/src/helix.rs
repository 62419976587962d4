//! Twitch Helix API client
//!
//! Thin typed wrapper over the Helix endpoints the bot uses: user and
//! follower lookups, stream status, channel information updates, clip
//! creation and commercials. All calls authenticate with the broadcaster
//! token from configuration.

use crate::error::{EmberError, Result};
use chrono::{DateTime, Utc};
use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.twitch.tv/helix";

/// Configuration for the Helix client
#[derive(Debug, Clone)]
pub struct HelixConfig {
    /// Application client id
    pub client_id: String,
    /// Broadcaster OAuth token (without the "oauth:" prefix)
    pub token: String,
    /// Broadcaster user id, the subject of channel-scoped calls
    pub broadcaster_id: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// API base URL, overridable for tests
    pub base_url: String,
}

impl HelixConfig {
    pub fn new(
        client_id: impl Into<String>,
        token: impl Into<String>,
        broadcaster_id: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            token: token.into(),
            broadcaster_id: broadcaster_id.into(),
            timeout_secs: 10,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// A Twitch user as returned by `/users`
#[derive(Debug, Clone, Deserialize)]
pub struct HelixUser {
    pub id: String,
    pub login: String,
    pub display_name: String,
}

/// A live stream as returned by `/streams`
#[derive(Debug, Clone, Deserialize)]
pub struct HelixStream {
    pub user_id: String,
    pub game_name: String,
    pub title: String,
    pub started_at: DateTime<Utc>,
}

/// A created clip as returned by `/clips`
#[derive(Debug, Clone, Deserialize)]
pub struct HelixClip {
    pub id: String,
    pub edit_url: String,
}

/// Channel information patch for `/channels`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChannelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct FollowEntry {
    followed_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ChannelInfo {
    game_name: String,
}

#[derive(Debug, Deserialize)]
struct GameEntry {
    id: String,
}

/// Twitch Helix API client
#[derive(Debug, Clone)]
pub struct HelixClient {
    client: Client,
    config: HelixConfig,
}

impl HelixClient {
    /// Create a new Helix client from configuration
    pub fn new(config: HelixConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EmberError::network_with_source("Failed to create HTTP client", e))?;
        Ok(Self { client, config })
    }

    /// Broadcaster id the client is configured for
    pub fn broadcaster_id(&self) -> &str {
        &self.config.broadcaster_id
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        self.client
            .request(method, url)
            .header("Client-ID", &self.config.client_id)
            .bearer_auth(&self.config.token)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Envelope<T>> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmberError::twitch_with_status(
                format!("Helix request failed: {}", body),
                status.as_u16(),
            ));
        }
        Ok(response.json().await?)
    }

    /// Look up a user by login name
    pub async fn get_user(&self, login: &str) -> Result<Option<HelixUser>> {
        debug!("Fetching Helix user for login '{}'", login);
        let envelope: Envelope<HelixUser> = self
            .fetch(self.request(Method::GET, "/users").query(&[("login", login)]))
            .await?;
        Ok(envelope.data.into_iter().next())
    }

    /// When the given user started following the broadcaster, if at all
    pub async fn get_followed_at(&self, user_id: &str) -> Result<Option<DateTime<Utc>>> {
        let envelope: Envelope<FollowEntry> = self
            .fetch(self.request(Method::GET, "/channels/followers").query(&[
                ("broadcaster_id", self.config.broadcaster_id.as_str()),
                ("user_id", user_id),
            ]))
            .await?;
        Ok(envelope.data.into_iter().next().map(|f| f.followed_at))
    }

    /// The broadcaster's live stream, or `None` when offline
    pub async fn get_stream(&self) -> Result<Option<HelixStream>> {
        let envelope: Envelope<HelixStream> = self
            .fetch(
                self.request(Method::GET, "/streams")
                    .query(&[("user_id", self.config.broadcaster_id.as_str())]),
            )
            .await?;
        Ok(envelope.data.into_iter().next())
    }

    /// The game currently set on the channel, live or not
    pub async fn get_current_game(&self) -> Result<Option<String>> {
        let envelope: Envelope<ChannelInfo> = self
            .fetch(
                self.request(Method::GET, "/channels")
                    .query(&[("broadcaster_id", self.config.broadcaster_id.as_str())]),
            )
            .await?;
        Ok(envelope
            .data
            .into_iter()
            .next()
            .map(|c| c.game_name)
            .filter(|name| !name.is_empty()))
    }

    /// Resolve a game name to its Helix game id
    pub async fn get_game_id(&self, game_name: &str) -> Result<Option<String>> {
        let envelope: Envelope<GameEntry> = self
            .fetch(
                self.request(Method::GET, "/games")
                    .query(&[("name", game_name)]),
            )
            .await?;
        Ok(envelope.data.into_iter().next().map(|g| g.id))
    }

    /// Patch channel information (title and/or game)
    pub async fn update_channel(&self, update: &ChannelUpdate) -> Result<()> {
        let response = self
            .request(Method::PATCH, "/channels")
            .query(&[("broadcaster_id", self.config.broadcaster_id.as_str())])
            .json(update)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmberError::twitch_with_status(
                format!("Channel update failed: {}", body),
                status.as_u16(),
            ));
        }
        Ok(())
    }

    /// Create a clip of the last ~30 seconds of the stream
    pub async fn create_clip(&self) -> Result<HelixClip> {
        let envelope: Envelope<HelixClip> = self
            .fetch(
                self.request(Method::POST, "/clips")
                    .query(&[("broadcaster_id", self.config.broadcaster_id.as_str())]),
            )
            .await?;
        envelope
            .data
            .into_iter()
            .next()
            .ok_or_else(|| EmberError::twitch("Clip creation returned no clip"))
    }

    /// Start a commercial break of the given length in seconds
    pub async fn start_commercial(&self, length_secs: u32) -> Result<()> {
        let response = self
            .request(Method::POST, "/channels/commercial")
            .json(&serde_json::json!({
                "broadcaster_id": self.config.broadcaster_id,
                "length": length_secs,
            }))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmberError::twitch_with_status(
                format!("Commercial request failed: {}", body),
                status.as_u16(),
            ));
        }
        Ok(())
    }
}
