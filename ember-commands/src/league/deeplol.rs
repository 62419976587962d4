//! Posts profile links for the linked League accounts

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::datasets::{LolAccountsFile, LOL_ACCOUNTS};
use crate::permissions::CallerIdentity;
use async_trait::async_trait;
use ember_common::Result;
use std::time::Duration;

pub struct DeeplolCommand;

#[async_trait]
impl Command for DeeplolCommand {
    fn name(&self) -> &'static str {
        "deeplol"
    }

    fn description(&self) -> &'static str {
        "Displays the Deeplol link of all accounts."
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["opgg"]
    }

    fn keywords(&self) -> &'static [&'static str] {
        &["deeplol", "op.gg"]
    }

    fn category(&self) -> Category {
        Category::League
    }

    fn cooldown(&self) -> Duration {
        Duration::from_secs(5)
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

        let links = accounts
            .accounts
            .iter()
            .map(|account| {
                format!(
                    "https://www.deeplol.gg/summoner/{}/{}-{}",
                    account.region, account.name, account.tag
                )
            })
            .collect::<Vec<_>>()
            .join(" | ");
        ctx.chat.say(channel, links);
        Ok(())
    }
}
