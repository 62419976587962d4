//! Reports the best rank across the channel's linked accounts

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::datasets::{LolAccountsFile, LOL_ACCOUNTS};
use crate::league::{best_entry, rank_name, rank_score};
use crate::permissions::CallerIdentity;
use async_trait::async_trait;
use ember_common::Result;
use std::time::Duration;
use tracing::warn;

pub struct RankCommand;

#[async_trait]
impl Command for RankCommand {
    fn name(&self) -> &'static str {
        "rank"
    }

    fn description(&self) -> &'static str {
        "Displays the rank and LP of the highest elo account."
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["myrank"]
    }

    fn keywords(&self) -> &'static [&'static str] {
        &["what rank are you"]
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

        // (score, lp, label, region) of the best ranked account so far
        let mut best: Option<(u32, u32, String, String)> = None;

        for account in &accounts.accounts {
            let lookup = async {
                let riot_account = ctx
                    .riot
                    .account_by_riot_id(&account.name, &account.tag, &account.region)
                    .await?;
                let summoner = ctx
                    .riot
                    .summoner_by_puuid(&riot_account.puuid, &account.region)
                    .await?;
                ctx.riot
                    .ranked_entries(&summoner.id, &account.region)
                    .await
            };
            // One broken account must not hide the others
            let entries = match lookup.await {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(
                        "Skipping account {}#{}: {}",
                        account.name, account.tag, err
                    );
                    continue;
                }
            };

            let Some(entry) = best_entry(&entries) else {
                continue;
            };
            let Some(score) = rank_score(&entry.tier, &entry.rank) else {
                continue;
            };

            let is_better = match &best {
                Some((best_score, best_lp, _, _)) => {
                    score > *best_score || (score == *best_score && entry.league_points > *best_lp)
                }
                None => true,
            };
            if is_better {
                best = Some((
                    score,
                    entry.league_points,
                    format!("{}#{}", account.name, account.tag),
                    account.region.clone(),
                ));
            }
        }

        match best {
            Some((score, lp, label, region)) => {
                ctx.chat.say(
                    channel,
                    format!(
                        "{} is {} with {} LP ({})",
                        label,
                        rank_name(score),
                        lp,
                        region.to_uppercase()
                    ),
                );
            }
            None => {
                ctx.chat
                    .say(channel, "All linked accounts are unranked this split.");
            }
        }
        Ok(())
    }
}
