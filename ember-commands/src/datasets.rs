//! Shapes of the JSON documents the commands persist
//!
//! These mirror the files in the bot's data directory: `quotes.json`,
//! `followage.json`, `lol_accounts.json`, `jokes.json` and
//! `eightball_responses.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const QUOTES: &str = "quotes";
pub const FOLLOWAGE: &str = "followage";
pub const LOL_ACCOUNTS: &str = "lol_accounts";
pub const JOKES: &str = "jokes";
pub const EIGHTBALL_RESPONSES: &str = "eightball_responses";

/// Stored quotes, append-only except for moderation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuotesFile {
    pub quotes: Vec<String>,
}

/// Cached follow dates keyed by login
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowageFile {
    pub followers: BTreeMap<String, FollowerEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowerEntry {
    pub follow_date: DateTime<Utc>,
}

/// League accounts linked to the channel
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LolAccountsFile {
    pub accounts: Vec<LolAccount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LolAccount {
    /// Riot game name (the part before the #)
    pub name: String,
    /// Riot tag line (the part after the #)
    pub tag: String,
    /// Short region, e.g. "euw" or "na"
    pub region: String,
}

/// Canned jokes served by the joke command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JokesFile {
    pub jokes: Vec<String>,
}

/// Magic 8 ball answers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EightBallFile {
    pub responses: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lol_accounts_deserialization() {
        let json = r#"{
            "accounts": [
                {"name": "Faker", "tag": "KR1", "region": "kr"}
            ]
        }"#;
        let file: LolAccountsFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.accounts.len(), 1);
        assert_eq!(file.accounts[0].region, "kr");
    }

    #[test]
    fn test_followage_roundtrip() {
        let mut file = FollowageFile::default();
        file.followers.insert(
            "viewer".to_string(),
            FollowerEntry {
                follow_date: Utc::now(),
            },
        );
        let json = serde_json::to_string(&file).unwrap();
        let back: FollowageFile = serde_json::from_str(&json).unwrap();
        assert!(back.followers.contains_key("viewer"));
    }
}
