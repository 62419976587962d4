//! Magic 8 ball answers

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::datasets::{EightBallFile, EIGHTBALL_RESPONSES};
use crate::permissions::CallerIdentity;
use async_trait::async_trait;
use ember_common::Result;
use rand::Rng;
use std::time::Duration;

pub struct EightBallCommand;

#[async_trait]
impl Command for EightBallCommand {
    fn name(&self) -> &'static str {
        "8ball"
    }

    fn description(&self) -> &'static str {
        "Ask the Magic 8 Ball a question."
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
        caller: &CallerIdentity,
        args: &str,
    ) -> Result<()> {
        if args.trim().is_empty() {
            ctx.chat
                .reply(channel, &caller.login, "ask the 8 ball a question first. 🎱");
            return Ok(());
        }

        let responses: EightBallFile = ctx
            .store
            .read(EIGHTBALL_RESPONSES)
            .await?
            .unwrap_or_default();
        if responses.responses.is_empty() {
            ctx.chat.reply(
                channel,
                &caller.login,
                "the 8 ball has no answers right now. ❌",
            );
            return Ok(());
        }

        let index = {
            let mut rng = rand::thread_rng();
            rng.gen_range(0..responses.responses.len())
        };
        ctx.chat.reply(
            channel,
            &caller.login,
            format!("🎱 {}", responses.responses[index]),
        );
        Ok(())
    }
}
