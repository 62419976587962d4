//! Posts the Discord invite link

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::permissions::CallerIdentity;
use async_trait::async_trait;
use ember_common::Result;
use std::time::Duration;

pub struct DiscordCommand;

#[async_trait]
impl Command for DiscordCommand {
    fn name(&self) -> &'static str {
        "discord"
    }

    fn description(&self) -> &'static str {
        "Sends the Discord invite link."
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["join"]
    }

    fn category(&self) -> Category {
        Category::General
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
        let invite = &ctx.config.bot.discord_invite;
        if invite.is_empty() {
            ctx.chat
                .reply(channel, &caller.login, "no Discord invite is configured.");
        } else {
            ctx.chat
                .say(channel, format!("Join the Discord today: {}", invite));
        }
        Ok(())
    }
}
