//! Configuration loading utilities

use crate::settings::Config;
use crate::validation;
use ember_common::Result as EmberResult;
use std::env;
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),
}

impl From<ConfigError> for ember_common::EmberError {
    fn from(err: ConfigError) -> Self {
        ember_common::EmberError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = toml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        validation::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from the default locations
    ///
    /// Resolution order: `EMBER_CONFIG_PATH`, then `ember.toml` in the
    /// working directory, then built-in defaults with env overrides.
    pub fn load() -> EmberResult<Config> {
        let config = if let Ok(config_path) = env::var("EMBER_CONFIG_PATH") {
            Self::load_config(&config_path)?
        } else if Path::new("ember.toml").exists() {
            Self::load_config("ember.toml")?
        } else {
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config)?;
            validation::validate(&config)?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> EmberResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        // Twitch configuration overrides
        if let Ok(username) = env::var("TWITCH_BOT_USERNAME") {
            config.twitch.bot_username = username;
        }
        if let Ok(token) = env::var("TWITCH_BOT_TOKEN") {
            config.twitch.bot_token = token;
        }
        if let Ok(channel) = env::var("TWITCH_CHANNEL") {
            config.twitch.channel = channel;
        }
        if let Ok(id) = env::var("TWITCH_BROADCASTER_ID") {
            config.twitch.broadcaster_id = id;
        }
        if let Ok(token) = env::var("TWITCH_BROADCASTER_TOKEN") {
            config.twitch.broadcaster_token = token;
        }
        if let Ok(client_id) = env::var("TWITCH_CLIENT_ID") {
            config.twitch.client_id = client_id;
        }
        if let Ok(timeout) = env::var("TWITCH_TIMEOUT") {
            config.twitch.request_timeout_seconds =
                timeout.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "TWITCH_TIMEOUT".to_string(),
                    source: Box::new(e),
                })?;
        }

        // Riot configuration overrides
        if let Ok(api_key) = env::var("RIOT_API_KEY") {
            config.riot.api_key = api_key;
        }

        // Spotify configuration overrides
        if let Ok(client_id) = env::var("SPOTIFY_CLIENT_ID") {
            config.spotify.client_id = client_id;
        }
        if let Ok(client_secret) = env::var("SPOTIFY_CLIENT_SECRET") {
            config.spotify.client_secret = client_secret;
        }
        if let Ok(refresh_token) = env::var("SPOTIFY_REFRESH_TOKEN") {
            config.spotify.refresh_token = refresh_token;
        }

        // Bot configuration overrides
        if let Ok(data_dir) = env::var("EMBER_DATA_DIR") {
            config.bot.data_dir = data_dir;
        }
        if let Ok(level) = env::var("EMBER_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}
