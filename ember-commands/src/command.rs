//! The command capability contract

use crate::context::CommandContext;
use crate::permissions::{CallerIdentity, PermissionLevel};
use async_trait::async_trait;
use ember_common::Result;
use std::time::Duration;

/// Informational grouping for commands, mirrored in the `commands` listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    General,
    Fun,
    Moderation,
    Broadcaster,
    Spotify,
    League,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Fun => "Fun",
            Category::Moderation => "Moderation",
            Category::Broadcaster => "Broadcaster",
            Category::Spotify => "Spotify",
            Category::League => "League of Legends",
        }
    }

    /// Whether commands in this category show up in the public listing
    pub fn is_public(&self) -> bool {
        !matches!(self, Category::Moderation | Category::Broadcaster)
    }
}

/// A named, independently authored chat command
///
/// Commands declare their triggers, permission level and cooldown as
/// data; the dispatcher enforces both before `execute` runs, so command
/// bodies contain only their own behavior.
#[async_trait]
pub trait Command: Send + Sync {
    /// Unique canonical name (lowercase token), the primary registry key
    fn name(&self) -> &'static str;

    /// One-line description for the listing
    fn description(&self) -> &'static str;

    /// Alternate literal tokens resolving to this command
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Substrings that trigger this command from anywhere in a message
    fn keywords(&self) -> &'static [&'static str] {
        &[]
    }

    fn category(&self) -> Category;

    /// Minimum caller role; defaults to everyone
    fn required_permission(&self) -> PermissionLevel {
        PermissionLevel::Viewer
    }

    /// Minimum interval between two accepted invocations per user
    fn cooldown(&self) -> Duration {
        Duration::ZERO
    }

    /// Run the command
    ///
    /// `args` is the remainder of the message after the trigger token for
    /// name/alias invocations, or the whole raw message for keyword hits.
    async fn execute(
        &self,
        ctx: &CommandContext,
        channel: &str,
        caller: &CallerIdentity,
        args: &str,
    ) -> Result<()>;
}
