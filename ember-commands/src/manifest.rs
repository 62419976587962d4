//! The explicit manifest of built-in commands
//!
//! Registration order is the manifest order, which makes keyword
//! resolution and the public listing deterministic across restarts.

use crate::broadcaster::{ClearQuotesCommand, RestartCommand};
use crate::command::Command;
use crate::fun::{
    AddQuoteCommand, ClipCommand, DicksizeCommand, EightBallCommand, JokeCommand, QuoteCommand,
};
use crate::general::{CommandsCommand, DiscordCommand, FollowageCommand, UptimeCommand};
use crate::league::{CurrentGameCommand, DeeplolCommand, RankCommand};
use crate::moderation::{DelQuoteCommand, RunAdCommand, SetGameCommand, SetTitleCommand};
use crate::registry::CommandRegistry;
use crate::spotify::SongRequestCommand;
use std::sync::Arc;
use tracing::{error, info};

/// Every built-in command, grouped by category
pub fn builtin_commands() -> Vec<Arc<dyn Command>> {
    vec![
        // General
        Arc::new(CommandsCommand),
        Arc::new(DiscordCommand),
        Arc::new(FollowageCommand),
        Arc::new(UptimeCommand),
        // Spotify
        Arc::new(SongRequestCommand::new()),
        // Fun
        Arc::new(EightBallCommand),
        Arc::new(JokeCommand),
        Arc::new(QuoteCommand),
        Arc::new(AddQuoteCommand),
        Arc::new(DicksizeCommand),
        Arc::new(ClipCommand),
        // Moderation
        Arc::new(RunAdCommand),
        Arc::new(SetGameCommand),
        Arc::new(SetTitleCommand),
        Arc::new(DelQuoteCommand),
        // Broadcaster
        Arc::new(RestartCommand),
        Arc::new(ClearQuotesCommand),
        // League of Legends
        Arc::new(RankCommand),
        Arc::new(DeeplolCommand),
        Arc::new(CurrentGameCommand),
    ]
}

/// Register the manifest into a registry
///
/// A conflicting command is logged and skipped; the rest still load, so
/// one bad definition never aborts startup.
pub fn load_builtins(registry: &mut CommandRegistry) {
    for command in builtin_commands() {
        let name = command.name();
        match registry.register(command) {
            Ok(()) => info!("Loaded command: {}", name),
            Err(err) => error!("Failed to load command {}: {}", name, err),
        }
    }
}
