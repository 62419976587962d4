//! Deletes a stored quote by number

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::datasets::{QuotesFile, QUOTES};
use crate::permissions::{CallerIdentity, PermissionLevel};
use async_trait::async_trait;
use ember_common::Result;
use tracing::info;

pub struct DelQuoteCommand;

#[async_trait]
impl Command for DelQuoteCommand {
    fn name(&self) -> &'static str {
        "delquote"
    }

    fn description(&self) -> &'static str {
        "Deletes a quote by number."
    }

    fn category(&self) -> Category {
        Category::Moderation
    }

    fn required_permission(&self) -> PermissionLevel {
        PermissionLevel::Moderator
    }

    async fn execute(
        &self,
        ctx: &CommandContext,
        channel: &str,
        caller: &CallerIdentity,
        args: &str,
    ) -> Result<()> {
        let Some(number) = args
            .split_whitespace()
            .next()
            .and_then(|t| t.parse::<usize>().ok())
            .filter(|n| *n >= 1)
        else {
            ctx.chat
                .reply(channel, &caller.login, "please provide a quote number. 📝");
            return Ok(());
        };

        let mut removed: Option<String> = None;
        let index = number - 1;
        ctx.store
            .update(QUOTES, QuotesFile::default, |quotes| {
                if index < quotes.quotes.len() {
                    removed = Some(quotes.quotes.remove(index));
                }
            })
            .await?;

        match removed {
            Some(quote) => {
                info!("Quote #{} deleted by {}: {}", number, caller.login, quote);
                ctx.chat
                    .say(channel, format!("Quote #{} deleted.", number));
            }
            None => {
                ctx.chat.reply(
                    channel,
                    &caller.login,
                    "that quote number doesn't exist. ❌",
                );
            }
        }
        Ok(())
    }
}
