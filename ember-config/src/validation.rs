//! Configuration validation

use crate::loader::ConfigError;
use crate::settings::Config;

/// Validate the fields the bot cannot start without
///
/// Riot and Spotify credentials are optional: the corresponding commands
/// fail at invocation time with a chat-visible error instead of blocking
/// startup for streamers who do not use them.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    require(&config.twitch.bot_username, "twitch.bot_username")?;
    require(&config.twitch.bot_token, "twitch.bot_token")?;
    require(&config.twitch.channel, "twitch.channel")?;
    require(&config.twitch.broadcaster_id, "twitch.broadcaster_id")?;
    require(&config.twitch.broadcaster_token, "twitch.broadcaster_token")?;
    require(&config.twitch.client_id, "twitch.client_id")?;

    if config.twitch.request_timeout_seconds == 0 {
        return Err(ConfigError::MissingConfig(
            "twitch.request_timeout_seconds must be greater than 0".to_string(),
        ));
    }
    if config.bot.data_dir.is_empty() {
        return Err(ConfigError::MissingConfig(
            "bot.data_dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn require(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::MissingConfig(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Config;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.twitch.bot_username = "emberbot".to_string();
        config.twitch.bot_token = "oauthtoken".to_string();
        config.twitch.channel = "streamer".to_string();
        config.twitch.broadcaster_id = "12345".to_string();
        config.twitch.broadcaster_token = "broadcastertoken".to_string();
        config.twitch.client_id = "clientid".to_string();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_token_fails() {
        let mut config = valid_config();
        config.twitch.bot_token = String::new();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("twitch.bot_token"));
    }

    #[test]
    fn test_riot_and_spotify_are_optional() {
        let config = valid_config();
        assert!(config.riot.api_key.is_empty());
        assert!(config.spotify.refresh_token.is_empty());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_timeout_fails() {
        let mut config = valid_config();
        config.twitch.request_timeout_seconds = 0;
        assert!(validate(&config).is_err());
    }
}
