//! Shuts the bot down so the supervisor restarts it

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::permissions::{CallerIdentity, PermissionLevel};
use async_trait::async_trait;
use ember_common::Result;
use tracing::info;

pub struct RestartCommand;

#[async_trait]
impl Command for RestartCommand {
    fn name(&self) -> &'static str {
        "restart"
    }

    fn description(&self) -> &'static str {
        "Restarts the bot."
    }

    fn category(&self) -> Category {
        Category::Broadcaster
    }

    fn required_permission(&self) -> PermissionLevel {
        PermissionLevel::Broadcaster
    }

    async fn execute(
        &self,
        ctx: &CommandContext,
        channel: &str,
        caller: &CallerIdentity,
        _args: &str,
    ) -> Result<()> {
        info!("Bot restart initiated by {}", caller.login);
        ctx.chat.say(
            channel,
            format!("🔄 Restart initiated by @{}! Back in a moment...", caller.login),
        );
        ctx.shutdown.cancel();
        Ok(())
    }
}
