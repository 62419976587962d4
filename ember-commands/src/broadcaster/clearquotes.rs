//! Wipes the quote dataset

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::datasets::{QuotesFile, QUOTES};
use crate::permissions::{CallerIdentity, PermissionLevel};
use async_trait::async_trait;
use ember_common::Result;
use tracing::info;

pub struct ClearQuotesCommand;

#[async_trait]
impl Command for ClearQuotesCommand {
    fn name(&self) -> &'static str {
        "clearquotes"
    }

    fn description(&self) -> &'static str {
        "Removes all stored quotes."
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
        ctx.store.write(QUOTES, &QuotesFile::default()).await?;
        info!("All quotes cleared by {}", caller.login);
        ctx.chat.say(channel, "All quotes have been cleared. 🧹");
        Ok(())
    }
}
