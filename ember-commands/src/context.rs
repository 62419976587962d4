//! Shared state handed to every command execution

use crate::chat::ChatSender;
use ember_common::helix::{HelixClient, HelixConfig};
use ember_common::riot::RiotClient;
use ember_common::spotify::{SpotifyClient, SpotifyConfig};
use ember_common::{JsonStore, Result};
use ember_config::Config;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Everything a command body may need: configuration, the outbound chat
/// queue, the REST clients and the JSON document store
pub struct CommandContext {
    /// Application configuration
    pub config: Arc<Config>,
    /// Outbound chat queue
    pub chat: ChatSender,
    /// Twitch Helix client
    pub helix: HelixClient,
    /// Riot Games client
    pub riot: RiotClient,
    /// Spotify client
    pub spotify: SpotifyClient,
    /// JSON document store for quotes, follow dates and linked accounts
    pub store: JsonStore,
    /// Cancelled by the restart command; the binary treats it like ctrl-c
    pub shutdown: CancellationToken,
    /// Precomputed public command listing, set once after registration
    command_listing: RwLock<String>,
}

impl CommandContext {
    /// Build the context and its API clients from configuration
    pub fn new(config: Arc<Config>, chat: ChatSender) -> Result<Self> {
        let mut helix_config = HelixConfig::new(
            config.twitch.client_id.clone(),
            config.twitch.broadcaster_token.clone(),
            config.twitch.broadcaster_id.clone(),
        );
        helix_config.timeout_secs = config.twitch.request_timeout_seconds;
        let helix = HelixClient::new(helix_config)?;
        let riot = RiotClient::new(
            config.riot.api_key.clone(),
            config.riot.request_timeout_seconds,
        )?;
        let spotify = SpotifyClient::new(SpotifyConfig {
            client_id: config.spotify.client_id.clone(),
            client_secret: config.spotify.client_secret.clone(),
            refresh_token: config.spotify.refresh_token.clone(),
            timeout_secs: config.spotify.request_timeout_seconds,
        })?;
        let store = JsonStore::new(&config.bot.data_dir)?;

        Ok(Self {
            config,
            chat,
            helix,
            riot,
            spotify,
            store,
            shutdown: CancellationToken::new(),
            command_listing: RwLock::new(String::new()),
        })
    }

    /// Store the public listing computed from the loaded registry
    pub fn set_command_listing(&self, listing: String) {
        *self.command_listing.write() = listing;
    }

    /// The public listing shown by the commands command
    pub fn command_listing(&self) -> String {
        self.command_listing.read().clone()
    }
}

impl std::fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("config", &"<Config>")
            .field("store", &self.store)
            .finish()
    }
}
