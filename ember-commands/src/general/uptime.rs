//! Reports how long the stream has been live

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::permissions::CallerIdentity;
use async_trait::async_trait;
use chrono::Utc;
use ember_common::Result;

pub struct UptimeCommand;

#[async_trait]
impl Command for UptimeCommand {
    fn name(&self) -> &'static str {
        "uptime"
    }

    fn description(&self) -> &'static str {
        "Displays how long the stream has been live."
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["streamtime"]
    }

    fn keywords(&self) -> &'static [&'static str] {
        &["how long have you been live"]
    }

    fn category(&self) -> Category {
        Category::General
    }

    async fn execute(
        &self,
        ctx: &CommandContext,
        channel: &str,
        _caller: &CallerIdentity,
        _args: &str,
    ) -> Result<()> {
        match ctx.helix.get_stream().await? {
            Some(stream) => {
                let minutes = (Utc::now() - stream.started_at).num_minutes().max(0);
                ctx.chat.say(
                    channel,
                    format!("The stream has been live for {} minutes.", minutes),
                );
            }
            None => {
                ctx.chat.say(channel, "The stream is not live currently. 🚫");
            }
        }
        Ok(())
    }
}
