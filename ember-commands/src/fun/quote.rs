//! Retrieves a stored quote, random or by number

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::datasets::{QuotesFile, QUOTES};
use crate::permissions::CallerIdentity;
use async_trait::async_trait;
use ember_common::Result;
use rand::Rng;

pub struct QuoteCommand;

#[async_trait]
impl Command for QuoteCommand {
    fn name(&self) -> &'static str {
        "quote"
    }

    fn description(&self) -> &'static str {
        "Retrieves a quote."
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["randomquote"]
    }

    fn category(&self) -> Category {
        Category::Fun
    }

    async fn execute(
        &self,
        ctx: &CommandContext,
        channel: &str,
        caller: &CallerIdentity,
        args: &str,
    ) -> Result<()> {
        let quotes: QuotesFile = ctx.store.read(QUOTES).await?.unwrap_or_default();
        if quotes.quotes.is_empty() {
            ctx.chat
                .reply(channel, &caller.login, "there are no quotes yet. 📝");
            return Ok(());
        }

        // A leading number picks that quote (1-based), otherwise roll one
        let requested = args.split_whitespace().next().and_then(|t| t.parse::<usize>().ok());
        match requested {
            Some(number) => {
                if number >= 1 && number <= quotes.quotes.len() {
                    ctx.chat.say(
                        channel,
                        format!("Quote #{}: {}", number, quotes.quotes[number - 1]),
                    );
                } else {
                    ctx.chat.reply(
                        channel,
                        &caller.login,
                        "that quote number doesn't exist. ❌",
                    );
                }
            }
            None => {
                let index = {
                    let mut rng = rand::thread_rng();
                    rng.gen_range(0..quotes.quotes.len())
                };
                ctx.chat.say(
                    channel,
                    format!("Random Quote #{}: {}", index + 1, quotes.quotes[index]),
                );
            }
        }
        Ok(())
    }
}
