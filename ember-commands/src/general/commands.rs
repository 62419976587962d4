//! Lists the available public commands

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::permissions::CallerIdentity;
use async_trait::async_trait;
use ember_common::Result;
use std::time::Duration;

pub struct CommandsCommand;

#[async_trait]
impl Command for CommandsCommand {
    fn name(&self) -> &'static str {
        "commands"
    }

    fn description(&self) -> &'static str {
        "Displays all available commands for viewers."
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["help"]
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
        let listing = ctx.command_listing();
        if listing.is_empty() {
            ctx.chat
                .reply(channel, &caller.login, "no commands are available yet.");
        } else {
            ctx.chat.reply(
                channel,
                &caller.login,
                format!("here are the available commands: {}", listing),
            );
        }
        Ok(())
    }
}
