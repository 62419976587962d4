//! Queues a song on the broadcaster's Spotify player
//!
//! Recently queued tracks are remembered for a few minutes so chat
//! cannot spam the same song back-to-back.

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::permissions::CallerIdentity;
use async_trait::async_trait;
use dashmap::DashMap;
use ember_common::Result;
use std::time::{Duration, Instant};
use tracing::info;

const DUPLICATE_WINDOW: Duration = Duration::from_secs(300);

pub struct SongRequestCommand {
    recent: DashMap<String, Instant>,
}

impl SongRequestCommand {
    pub fn new() -> Self {
        Self {
            recent: DashMap::new(),
        }
    }

    /// True when the track was queued inside the duplicate window
    fn recently_queued(&self, uri: &str, now: Instant) -> bool {
        self.recent
            .get(uri)
            .map(|queued_at| now.saturating_duration_since(*queued_at) < DUPLICATE_WINDOW)
            .unwrap_or(false)
    }

    fn remember(&self, uri: String, now: Instant) {
        self.recent
            .retain(|_, queued_at| now.saturating_duration_since(*queued_at) < DUPLICATE_WINDOW);
        self.recent.insert(uri, now);
    }
}

impl Default for SongRequestCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for SongRequestCommand {
    fn name(&self) -> &'static str {
        "songrequest"
    }

    fn description(&self) -> &'static str {
        "Request a song to be added to the Spotify queue."
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["sr"]
    }

    fn category(&self) -> Category {
        Category::Spotify
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
        let query = args.trim();
        if query.is_empty() {
            ctx.chat.reply(
                channel,
                &caller.login,
                "please provide a song to search for. 🎶",
            );
            return Ok(());
        }

        let Some(track) = ctx.spotify.search_track(query).await? else {
            ctx.chat
                .say(channel, format!("Track not found: {}. ❌", query));
            return Ok(());
        };

        let now = Instant::now();
        if self.recently_queued(&track.uri, now) {
            ctx.chat.reply(
                channel,
                &caller.login,
                format!("{} was queued just a moment ago. 🎶", track.name),
            );
            return Ok(());
        }

        ctx.spotify.queue_track(&track.uri).await?;
        self.remember(track.uri.clone(), now);
        info!("Queued '{}' for {}", track.name, caller.login);
        ctx.chat.say(
            channel,
            format!("Queued: {} by {} 🎶", track.name, track.artist_names()),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_window() {
        let command = SongRequestCommand::new();
        let now = Instant::now();

        assert!(!command.recently_queued("spotify:track:abc", now));
        command.remember("spotify:track:abc".to_string(), now);
        assert!(command.recently_queued("spotify:track:abc", now + Duration::from_secs(60)));
        assert!(!command.recently_queued("spotify:track:abc", now + DUPLICATE_WINDOW));
    }

    #[test]
    fn test_remember_prunes_expired_entries() {
        let command = SongRequestCommand::new();
        let now = Instant::now();

        command.remember("spotify:track:old".to_string(), now);
        command.remember(
            "spotify:track:new".to_string(),
            now + DUPLICATE_WINDOW + Duration::from_secs(1),
        );
        assert_eq!(command.recent.len(), 1);
    }
}
