//! Creates a clip of the last 30 seconds of the stream

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::permissions::CallerIdentity;
use async_trait::async_trait;
use ember_common::Result;
use std::time::Duration;
use tracing::info;

pub struct ClipCommand;

#[async_trait]
impl Command for ClipCommand {
    fn name(&self) -> &'static str {
        "clip"
    }

    fn description(&self) -> &'static str {
        "Create a clip for the last 30 seconds of the stream."
    }

    fn category(&self) -> Category {
        Category::Fun
    }

    fn cooldown(&self) -> Duration {
        Duration::from_secs(5)
    }

    async fn execute(
        &self,
        ctx: &CommandContext,
        channel: &str,
        _caller: &CallerIdentity,
        _args: &str,
    ) -> Result<()> {
        ctx.chat
            .say(channel, "Creating a clip for the last 30 seconds... 🎬");

        let clip = ctx.helix.create_clip().await?;
        info!("Clip created: {}", clip.id);
        ctx.chat.say(
            channel,
            format!("Clip created! You can edit it here: {}", clip.edit_url),
        );
        Ok(())
    }
}
