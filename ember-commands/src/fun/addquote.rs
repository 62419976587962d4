//! Adds a new quote, stamped with the current game and date

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::datasets::{QuotesFile, QUOTES};
use crate::permissions::CallerIdentity;
use async_trait::async_trait;
use chrono::Utc;
use ember_common::Result;
use tracing::info;

pub struct AddQuoteCommand;

#[async_trait]
impl Command for AddQuoteCommand {
    fn name(&self) -> &'static str {
        "addquote"
    }

    fn description(&self) -> &'static str {
        "Adds a new quote."
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
        let quote = args.trim();
        if quote.is_empty() {
            ctx.chat
                .reply(channel, &caller.login, "please provide a quote. 📝");
            return Ok(());
        }

        let game = ctx
            .helix
            .get_current_game()
            .await?
            .unwrap_or_else(|| "Just Chatting".to_string());
        let entry = format!(
            "\"{}\" - '{}' | ({}) ({})",
            quote,
            ctx.config.twitch.channel,
            game,
            Utc::now().format("%Y-%m-%d")
        );

        let stored_entry = entry.clone();
        let stored = ctx
            .store
            .update(QUOTES, QuotesFile::default, move |quotes| {
                quotes.quotes.push(stored_entry);
            })
            .await?;

        info!("Quote #{} added by {}", stored.quotes.len(), caller.login);
        ctx.chat.say(
            channel,
            format!("Quote #{} added: {}", stored.quotes.len(), entry),
        );
        Ok(())
    }
}
