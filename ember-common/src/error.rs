//! Error types and utilities for Ember

use thiserror::Error;

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;

/// Main error type for Ember operations
#[derive(Error, Debug)]
pub enum EmberError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network related errors (HTTP requests, etc.)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Twitch Helix API related errors
    #[error("Twitch API error: {message}")]
    Twitch {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Riot Games API related errors
    #[error("Riot API error: {message}")]
    Riot {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Spotify API related errors
    #[error("Spotify API error: {message}")]
    Spotify {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON document store errors
    #[error("Store error: {message}")]
    Store {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl EmberError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new network error with source
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Twitch API error
    pub fn twitch(msg: impl Into<String>) -> Self {
        Self::Twitch {
            message: msg.into(),
            status_code: None,
            source: None,
        }
    }

    /// Create a new Twitch API error with HTTP status
    pub fn twitch_with_status(msg: impl Into<String>, status: u16) -> Self {
        Self::Twitch {
            message: msg.into(),
            status_code: Some(status),
            source: None,
        }
    }

    /// Create a new Riot API error
    pub fn riot(msg: impl Into<String>) -> Self {
        Self::Riot {
            message: msg.into(),
            status_code: None,
            source: None,
        }
    }

    /// Create a new Riot API error with HTTP status
    pub fn riot_with_status(msg: impl Into<String>, status: u16) -> Self {
        Self::Riot {
            message: msg.into(),
            status_code: Some(status),
            source: None,
        }
    }

    /// Create a new Spotify API error
    pub fn spotify(msg: impl Into<String>) -> Self {
        Self::Spotify {
            message: msg.into(),
            status_code: None,
            source: None,
        }
    }

    /// Create a new Spotify API error with HTTP status
    pub fn spotify_with_status(msg: impl Into<String>, status: u16) -> Self {
        Self::Spotify {
            message: msg.into(),
            status_code: Some(status),
            source: None,
        }
    }

    /// Create a new store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new store error with source
    pub fn store_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Store {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}

// Error conversion implementations for external types

/// Convert from reqwest::Error to EmberError
impl From<reqwest::Error> for EmberError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network_with_source("Request timeout", err)
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err)
        } else if err.is_status() {
            let status_code = err.status().map(|s| s.as_u16()).unwrap_or(0);
            Self::network_with_source(format!("HTTP error: {}", status_code), err)
        } else {
            Self::network_with_source("Network request failed", err)
        }
    }
}

/// Convert from toml::de::Error to EmberError
impl From<toml::de::Error> for EmberError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = EmberError::new("test message");
        assert!(error.to_string().contains("test message"));

        let config_error = EmberError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("config issue"));

        let twitch_error = EmberError::twitch_with_status("API error", 429);
        assert!(twitch_error.to_string().contains("Twitch API error"));
        assert!(twitch_error.to_string().contains("API error"));

        let riot_error = EmberError::riot_with_status("Server error", 500);
        assert!(riot_error.to_string().contains("Riot API error"));

        let validation_error = EmberError::validation_field("Invalid input", "username");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = EmberError::with_source("Failed to read file", io_error);

        assert!(wrapped_error.to_string().contains("Failed to read file"));
        assert!(wrapped_error.source().is_some());

        let store_error = EmberError::store_with_source(
            "Store read failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );
        assert!(store_error.to_string().contains("Store error"));
        assert!(store_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ember_error: EmberError = io_error.into();

        assert!(ember_error.to_string().contains("I/O error"));
        assert!(ember_error.source().is_some());
    }

    #[test]
    fn test_serde_error_conversion() {
        let invalid_json = r#"{"invalid": json}"#;
        let serde_error = serde_json::from_str::<serde_json::Value>(invalid_json).unwrap_err();
        let ember_error: EmberError = serde_error.into();

        assert!(ember_error.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_display_formatting() {
        let error = EmberError::new("test error");
        assert_eq!(format!("{}", error), "test error");

        let config_error = EmberError::config("missing field");
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: missing field"
        );

        let twitch_error = EmberError::twitch_with_status("rate limited", 429);
        assert_eq!(format!("{}", twitch_error), "Twitch API error: rate limited");
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(EmberError::new("failure"))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
        assert!(returns_error().unwrap_err().to_string().contains("failure"));
    }
}
