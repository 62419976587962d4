//! Spotify Web API client
//!
//! Handles the refresh-token grant for the broadcaster's Spotify account,
//! caching the short-lived access token in memory, plus the track search
//! and queue endpoints behind the song request command.

use crate::error::{EmberError, Result};
use parking_lot::RwLock;
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const ACCOUNTS_URL: &str = "https://accounts.spotify.com/api/token";
const API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Refresh the token a minute early so in-flight calls never race expiry
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Configuration for the Spotify client
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub timeout_secs: u64,
}

/// A track found via search
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrack {
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
}

impl SpotifyTrack {
    /// Comma-joined artist names for chat replies
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: TrackPage,
}

#[derive(Debug, Deserialize)]
struct TrackPage {
    items: Vec<SpotifyTrack>,
}

#[derive(Debug)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Spotify Web API client with in-memory token caching
#[derive(Debug)]
pub struct SpotifyClient {
    client: Client,
    config: SpotifyConfig,
    token: RwLock<Option<CachedToken>>,
}

impl SpotifyClient {
    /// Create a new Spotify client from configuration
    pub fn new(config: SpotifyConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EmberError::network_with_source("Failed to create HTTP client", e))?;
        Ok(Self {
            client,
            config,
            token: RwLock::new(None),
        })
    }

    /// A valid access token, refreshed through the refresh-token grant when
    /// the cached one is missing or about to expire
    async fn access_token(&self) -> Result<String> {
        if let Some(cached) = self.token.read().as_ref() {
            if cached.expires_at > Instant::now() + EXPIRY_MARGIN {
                return Ok(cached.access_token.clone());
            }
        }
        self.refresh_access_token().await
    }

    async fn refresh_access_token(&self) -> Result<String> {
        if self.config.refresh_token.is_empty() {
            return Err(EmberError::spotify("No refresh token configured"));
        }

        debug!("Refreshing Spotify access token");
        let response = self
            .client
            .post(ACCOUNTS_URL)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.config.refresh_token.as_str()),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EmberError::spotify_with_status(
                "Token refresh failed",
                status.as_u16(),
            ));
        }

        let token: TokenResponse = response.json().await?;
        let access_token = token.access_token.clone();
        *self.token.write() = Some(CachedToken {
            access_token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        });
        info!("Spotify access token refreshed");
        Ok(access_token)
    }

    /// Search for the best-matching track for a free-text query
    pub async fn search_track(&self, query: &str) -> Result<Option<SpotifyTrack>> {
        let token = self.access_token().await?;
        let response = self
            .client
            .get(format!("{}/search", API_BASE_URL))
            .bearer_auth(token)
            .query(&[("q", query), ("type", "track"), ("limit", "1")])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EmberError::spotify_with_status(
                format!("Track search for '{}' failed", query),
                status.as_u16(),
            ));
        }
        let search: SearchResponse = response.json().await?;
        Ok(search.tracks.items.into_iter().next())
    }

    /// Append a track to the playback queue
    pub async fn queue_track(&self, track_uri: &str) -> Result<()> {
        let token = self.access_token().await?;
        let response = self
            .client
            .post(format!("{}/me/player/queue", API_BASE_URL))
            .bearer_auth(token)
            .query(&[("uri", track_uri)])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EmberError::spotify_with_status(
                format!("Queueing track {} failed", track_uri),
                status.as_u16(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_names_joined() {
        let track = SpotifyTrack {
            uri: "spotify:track:abc".to_string(),
            name: "Song".to_string(),
            artists: vec![
                SpotifyArtist {
                    name: "First".to_string(),
                },
                SpotifyArtist {
                    name: "Second".to_string(),
                },
            ],
        };
        assert_eq!(track.artist_names(), "First, Second");
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "tracks": {
                "items": [
                    {
                        "uri": "spotify:track:abc",
                        "name": "Song",
                        "artists": [{"name": "Artist"}]
                    }
                ]
            }
        }"#;
        let search: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(search.tracks.items.len(), 1);
        assert_eq!(search.tracks.items[0].name, "Song");
    }
}
