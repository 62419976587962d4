//! Updates the stream title

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::permissions::{CallerIdentity, PermissionLevel};
use async_trait::async_trait;
use ember_common::helix::ChannelUpdate;
use ember_common::Result;
use std::time::Duration;
use tracing::info;

pub struct SetTitleCommand;

#[async_trait]
impl Command for SetTitleCommand {
    fn name(&self) -> &'static str {
        "settitle"
    }

    fn description(&self) -> &'static str {
        "Updates the stream title."
    }

    fn category(&self) -> Category {
        Category::Moderation
    }

    fn required_permission(&self) -> PermissionLevel {
        PermissionLevel::Moderator
    }

    fn cooldown(&self) -> Duration {
        Duration::from_secs(30)
    }

    async fn execute(
        &self,
        ctx: &CommandContext,
        channel: &str,
        caller: &CallerIdentity,
        args: &str,
    ) -> Result<()> {
        let title = args.trim();
        if title.is_empty() {
            ctx.chat
                .reply(channel, &caller.login, "please provide a title. 📝");
            return Ok(());
        }

        ctx.helix
            .update_channel(&ChannelUpdate {
                game_id: None,
                title: Some(title.to_string()),
            })
            .await?;
        info!("Stream title updated by {} to: {}", caller.login, title);
        ctx.chat.reply(
            channel,
            &caller.login,
            format!("the stream title has been updated to: {} 🎉", title),
        );
        Ok(())
    }
}
