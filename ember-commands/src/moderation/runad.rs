//! Runs a commercial break on the channel

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::permissions::{CallerIdentity, PermissionLevel};
use async_trait::async_trait;
use ember_common::Result;
use std::time::Duration;
use tracing::info;

const AD_LENGTH_SECS: u32 = 180;

pub struct RunAdCommand;

#[async_trait]
impl Command for RunAdCommand {
    fn name(&self) -> &'static str {
        "runad"
    }

    fn description(&self) -> &'static str {
        "Run an ad on the channel."
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["ad", "commercial"]
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
        _args: &str,
    ) -> Result<()> {
        ctx.chat.say(
            channel,
            "🚰 Get a drink, we're taking a 3-minute break... 📺",
        );
        ctx.helix.start_commercial(AD_LENGTH_SECS).await?;
        info!("Ad started by {}", caller.login);
        Ok(())
    }
}
