//! Riot Games API client
//!
//! Covers the account, summoner, league and spectator lookups the League
//! commands need. Riot splits its API between platform hosts (euw1, na1,
//! ...) and regional routing hosts (europe, americas, asia); linked
//! accounts carry the short region ("euw", "na") and both hosts are
//! derived from it.

use crate::error::{EmberError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Map a short region to its platform host
fn platform_host(region: &str) -> Option<&'static str> {
    match region.to_lowercase().as_str() {
        "euw" => Some("euw1"),
        "na" => Some("na1"),
        "eune" => Some("eun1"),
        "kr" => Some("kr"),
        "jp" => Some("jp1"),
        "oce" => Some("oc1"),
        "br" => Some("br1"),
        "lan" => Some("la1"),
        "las" => Some("la2"),
        "ru" => Some("ru"),
        "tr" => Some("tr1"),
        _ => None,
    }
}

/// Map a short region to its regional routing host
fn regional_host(region: &str) -> Option<&'static str> {
    match region.to_lowercase().as_str() {
        "euw" | "eune" | "ru" | "tr" => Some("europe"),
        "na" | "oce" | "br" | "lan" | "las" => Some("americas"),
        "kr" | "jp" => Some("asia"),
        _ => None,
    }
}

/// A Riot account resolved from a game name + tag line
#[derive(Debug, Clone, Deserialize)]
pub struct RiotAccount {
    pub puuid: String,
    #[serde(rename = "gameName")]
    pub game_name: String,
    #[serde(rename = "tagLine")]
    pub tag_line: String,
}

/// A League summoner
#[derive(Debug, Clone, Deserialize)]
pub struct Summoner {
    pub id: String,
    pub puuid: String,
}

/// One ranked queue entry for a summoner
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueEntry {
    #[serde(rename = "queueType")]
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    #[serde(rename = "leaguePoints")]
    pub league_points: u32,
}

/// A participant in a live game
#[derive(Debug, Clone, Deserialize)]
pub struct GameParticipant {
    pub puuid: String,
    #[serde(rename = "summonerId", default)]
    pub summoner_id: Option<String>,
}

/// A live game as returned by the spectator API
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveGame {
    #[serde(rename = "gameMode")]
    pub game_mode: String,
    pub participants: Vec<GameParticipant>,
}

/// Riot Games API client
#[derive(Debug, Clone)]
pub struct RiotClient {
    client: Client,
    api_key: String,
}

impl RiotClient {
    /// Create a new Riot client with the given API key
    pub fn new(api_key: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| EmberError::network_with_source("Failed to create HTTP client", e))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!("Riot API request: {}", url);
        let response = self
            .client
            .get(&url)
            .header("X-Riot-Token", &self.api_key)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EmberError::riot_with_status(
                format!("Riot request to {} failed", url),
                status.as_u16(),
            ));
        }
        Ok(response.json().await?)
    }

    fn platform(&self, region: &str) -> Result<&'static str> {
        platform_host(region)
            .ok_or_else(|| EmberError::validation_field("Unsupported region", region.to_string()))
    }

    fn regional(&self, region: &str) -> Result<&'static str> {
        regional_host(region)
            .ok_or_else(|| EmberError::validation_field("Unsupported region", region.to_string()))
    }

    /// Resolve an account by Riot id (game name + tag line)
    pub async fn account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
        region: &str,
    ) -> Result<RiotAccount> {
        let host = self.regional(region)?;
        self.get(format!(
            "https://{}.api.riotgames.com/riot/account/v1/accounts/by-riot-id/{}/{}",
            host, game_name, tag_line
        ))
        .await
    }

    /// Fetch the summoner behind a puuid
    pub async fn summoner_by_puuid(&self, puuid: &str, region: &str) -> Result<Summoner> {
        let host = self.platform(region)?;
        self.get(format!(
            "https://{}.api.riotgames.com/lol/summoner/v4/summoners/by-puuid/{}",
            host, puuid
        ))
        .await
    }

    /// Ranked queue entries for a summoner
    pub async fn ranked_entries(&self, summoner_id: &str, region: &str) -> Result<Vec<LeagueEntry>> {
        let host = self.platform(region)?;
        self.get(format!(
            "https://{}.api.riotgames.com/lol/league/v4/entries/by-summoner/{}",
            host, summoner_id
        ))
        .await
    }

    /// The live game a puuid is currently in, or `None` when not in game
    pub async fn active_game(&self, puuid: &str, region: &str) -> Result<Option<ActiveGame>> {
        let host = self.platform(region)?;
        let url = format!(
            "https://{}.api.riotgames.com/lol/spectator/v5/active-games/by-summoner/{}",
            host, puuid
        );
        debug!("Riot API request: {}", url);
        let response = self
            .client
            .get(&url)
            .header("X-Riot-Token", &self.api_key)
            .send()
            .await?;
        let status = response.status();
        if status.as_u16() == 404 {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(EmberError::riot_with_status(
                format!("Riot request to {} failed", url),
                status.as_u16(),
            ));
        }
        Ok(Some(response.json().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_host_mapping() {
        assert_eq!(platform_host("euw"), Some("euw1"));
        assert_eq!(platform_host("EUW"), Some("euw1"));
        assert_eq!(platform_host("na"), Some("na1"));
        assert_eq!(platform_host("kr"), Some("kr"));
        assert_eq!(platform_host("atlantis"), None);
    }

    #[test]
    fn test_regional_host_mapping() {
        assert_eq!(regional_host("euw"), Some("europe"));
        assert_eq!(regional_host("na"), Some("americas"));
        assert_eq!(regional_host("jp"), Some("asia"));
        assert_eq!(regional_host("atlantis"), None);
    }

    #[test]
    fn test_league_entry_deserialization() {
        let json = r#"{
            "queueType": "RANKED_SOLO_5x5",
            "tier": "GOLD",
            "rank": "II",
            "leaguePoints": 57
        }"#;
        let entry: LeagueEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.tier, "GOLD");
        assert_eq!(entry.rank, "II");
        assert_eq!(entry.league_points, 57);
    }
}
