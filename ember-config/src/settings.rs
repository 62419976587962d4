//! Application configuration structures

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bot behavior configuration
    pub bot: BotConfig,

    /// Twitch-related configuration
    pub twitch: TwitchConfig,

    /// Riot Games API configuration
    pub riot: RiotConfig,

    /// Spotify API configuration
    pub spotify: SpotifyConfig,

    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Bot behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Command trigger prefix
    pub prefix: char,

    /// Directory holding the JSON datasets (quotes, followage, accounts)
    pub data_dir: String,

    /// Upper bound on a single command execution, in seconds; 0 disables
    pub execution_timeout_seconds: u64,

    /// Interval between automatic Discord promos while live, in minutes;
    /// 0 disables the promo task
    pub promo_interval_minutes: u64,

    /// Discord invite link posted by the discord command and promo task
    pub discord_invite: String,

    /// Whether to welcome first-time chatters
    pub welcome_first_chatters: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: '!',
            data_dir: "data".to_string(),
            execution_timeout_seconds: 30,
            promo_interval_minutes: 30,
            discord_invite: String::new(),
            welcome_first_chatters: true,
        }
    }
}

/// Twitch connection and API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitchConfig {
    /// Login name of the bot account
    pub bot_username: String,

    /// OAuth token of the bot account (chat)
    pub bot_token: String,

    /// Channel to join (broadcaster login name)
    pub channel: String,

    /// Broadcaster user id for Helix channel-scoped calls
    pub broadcaster_id: String,

    /// OAuth token of the broadcaster (Helix)
    pub broadcaster_token: String,

    /// Application client id
    pub client_id: String,

    /// Request timeout in seconds for Helix calls
    pub request_timeout_seconds: u64,
}

impl Default for TwitchConfig {
    fn default() -> Self {
        Self {
            bot_username: String::new(),
            bot_token: String::new(),
            channel: String::new(),
            broadcaster_id: String::new(),
            broadcaster_token: String::new(),
            client_id: String::new(),
            request_timeout_seconds: 10,
        }
    }
}

/// Riot Games API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiotConfig {
    /// Riot API key
    pub api_key: String,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
}

impl Default for RiotConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            request_timeout_seconds: 10,
        }
    }
}

/// Spotify API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotifyConfig {
    /// Application client id
    pub client_id: String,

    /// Application client secret
    pub client_secret: String,

    /// Long-lived refresh token for the broadcaster's account
    pub refresh_token: String,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            refresh_token: String::new(),
            request_timeout_seconds: 10,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level filter (e.g., "info", "debug")
    pub level: String,

    /// Optional log file, appended alongside stdout
    pub file: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bot.prefix, '!');
        assert_eq!(config.bot.data_dir, "data");
        assert_eq!(config.bot.promo_interval_minutes, 30);
        assert_eq!(config.twitch.request_timeout_seconds, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [twitch]
            bot_username = "emberbot"
            channel = "streamer"
            "#,
        )
        .unwrap();
        assert_eq!(config.twitch.bot_username, "emberbot");
        assert_eq!(config.twitch.channel, "streamer");
        assert_eq!(config.bot.prefix, '!');
        assert_eq!(config.twitch.request_timeout_seconds, 10);
    }
}
