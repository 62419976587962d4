//! Reports the average rank of the live game lobby
//!
//! Walks the linked accounts until one of them is in a game, then looks
//! up every participant's ranked entries and averages their scores.

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::datasets::{LolAccountsFile, LOL_ACCOUNTS};
use crate::league::{best_entry, rank_name, rank_score};
use crate::permissions::CallerIdentity;
use async_trait::async_trait;
use ember_common::riot::ActiveGame;
use ember_common::Result;
use std::time::Duration;
use tracing::{debug, warn};

pub struct CurrentGameCommand;

impl CurrentGameCommand {
    /// Average rank score of every ranked participant in the lobby
    async fn lobby_average(
        &self,
        ctx: &CommandContext,
        game: &ActiveGame,
        region: &str,
    ) -> (u32, usize) {
        let mut scores = Vec::new();
        for participant in &game.participants {
            let entries = match ctx
                .riot
                .summoner_by_puuid(&participant.puuid, region)
                .await
            {
                Ok(summoner) => ctx.riot.ranked_entries(&summoner.id, region).await,
                Err(err) => Err(err),
            };
            match entries {
                Ok(entries) => {
                    if let Some(score) = best_entry(&entries)
                        .and_then(|entry| rank_score(&entry.tier, &entry.rank))
                    {
                        scores.push(score);
                    }
                }
                Err(err) => debug!("Skipping participant: {}", err),
            }
        }

        if scores.is_empty() {
            (0, 0)
        } else {
            let sum: u32 = scores.iter().sum();
            (sum / scores.len() as u32, scores.len())
        }
    }
}

#[async_trait]
impl Command for CurrentGameCommand {
    fn name(&self) -> &'static str {
        "currentgame"
    }

    fn description(&self) -> &'static str {
        "Displays the average rank of the current game."
    }

    fn keywords(&self) -> &'static [&'static str] {
        &["current game"]
    }

    fn category(&self) -> Category {
        Category::League
    }

    fn cooldown(&self) -> Duration {
        Duration::from_secs(30)
    }

    async fn execute(
        &self,
        ctx: &CommandContext,
        channel: &str,
        caller: &CallerIdentity,
        _args: &str,
    ) -> Result<()> {
        let accounts: LolAccountsFile = ctx.store.read(LOL_ACCOUNTS).await?.unwrap_or_default();
        if accounts.accounts.is_empty() {
            ctx.chat
                .reply(channel, &caller.login, "no League accounts are linked.");
            return Ok(());
        }

        for account in &accounts.accounts {
            let riot_account = match ctx
                .riot
                .account_by_riot_id(&account.name, &account.tag, &account.region)
                .await
            {
                Ok(riot_account) => riot_account,
                Err(err) => {
                    warn!(
                        "Skipping account {}#{}: {}",
                        account.name, account.tag, err
                    );
                    continue;
                }
            };

            let game = match ctx
                .riot
                .active_game(&riot_account.puuid, &account.region)
                .await
            {
                Ok(Some(game)) => game,
                Ok(None) => continue,
                Err(err) => {
                    warn!(
                        "Spectator lookup failed for {}#{}: {}",
                        account.name, account.tag, err
                    );
                    continue;
                }
            };

            let (average, ranked_players) =
                self.lobby_average(ctx, &game, &account.region).await;
            if ranked_players == 0 {
                ctx.chat
                    .say(channel, "Nobody in the current game is ranked. 🤷");
            } else {
                ctx.chat.say(
                    channel,
                    format!(
                        "Average rank of the current game: {} ({} ranked players)",
                        rank_name(average),
                        ranked_players
                    ),
                );
            }
            return Ok(());
        }

        ctx.chat.say(channel, "Not in a game right now. 🚫");
        Ok(())
    }
}
