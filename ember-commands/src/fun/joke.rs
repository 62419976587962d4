//! Serves a random joke from the jokes dataset

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::datasets::{JokesFile, JOKES};
use crate::permissions::CallerIdentity;
use async_trait::async_trait;
use ember_common::Result;
use rand::Rng;
use std::time::Duration;

pub struct JokeCommand;

#[async_trait]
impl Command for JokeCommand {
    fn name(&self) -> &'static str {
        "joke"
    }

    fn description(&self) -> &'static str {
        "Get a random joke."
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["jotd"]
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
        _args: &str,
    ) -> Result<()> {
        let jokes: JokesFile = ctx.store.read(JOKES).await?.unwrap_or_default();
        if jokes.jokes.is_empty() {
            ctx.chat.reply(
                channel,
                &caller.login,
                "there are no jokes available at the moment. ❌",
            );
            return Ok(());
        }

        let index = {
            let mut rng = rand::thread_rng();
            rng.gen_range(0..jokes.jokes.len())
        };
        ctx.chat.reply(
            channel,
            &caller.login,
            format!("here's your joke: {} 😂", jokes.jokes[index]),
        );
        Ok(())
    }
}
