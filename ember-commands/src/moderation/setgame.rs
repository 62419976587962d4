//! Updates the game shown on the channel

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::permissions::{CallerIdentity, PermissionLevel};
use async_trait::async_trait;
use ember_common::helix::ChannelUpdate;
use ember_common::Result;
use std::time::Duration;
use tracing::info;

pub struct SetGameCommand;

#[async_trait]
impl Command for SetGameCommand {
    fn name(&self) -> &'static str {
        "setgame"
    }

    fn description(&self) -> &'static str {
        "Sets the current game."
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["changegame"]
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
        let game = args.trim();
        if game.is_empty() {
            ctx.chat
                .reply(channel, &caller.login, "please provide a game name. 🎮");
            return Ok(());
        }

        let Some(game_id) = ctx.helix.get_game_id(game).await? else {
            ctx.chat.reply(
                channel,
                &caller.login,
                format!("the game \"{}\" was not found. ❌", game),
            );
            return Ok(());
        };

        ctx.helix
            .update_channel(&ChannelUpdate {
                game_id: Some(game_id),
                title: None,
            })
            .await?;
        info!("Game updated to '{}' by {}", game, caller.login);
        ctx.chat.reply(
            channel,
            &caller.login,
            format!("the game has been updated to: {} 🎮", game),
        );
        Ok(())
    }
}
