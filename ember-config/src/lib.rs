//! Configuration management for the Ember Twitch bot

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{
    BotConfig, Config, LoggingSettings, RiotConfig, SpotifyConfig, TwitchConfig,
};
