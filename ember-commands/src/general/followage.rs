//! Tells a user how long they have been following the channel
//!
//! Follow dates are cached in the followage dataset so repeat lookups
//! skip Helix entirely; cache misses fall back to the followers
//! endpoint and persist what they find.

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::datasets::{FollowageFile, FollowerEntry, FOLLOWAGE};
use crate::permissions::CallerIdentity;
use async_trait::async_trait;
use chrono::Utc;
use ember_common::Result;
use std::time::Duration;
use tracing::info;

pub struct FollowageCommand;

#[async_trait]
impl Command for FollowageCommand {
    fn name(&self) -> &'static str {
        "followage"
    }

    fn description(&self) -> &'static str {
        "Displays how long a user has been following."
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["following"]
    }

    fn category(&self) -> Category {
        Category::General
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
        let target = args
            .split_whitespace()
            .next()
            .unwrap_or(caller.login.as_str())
            .trim_start_matches('@')
            .to_lowercase();

        if target.eq_ignore_ascii_case(&ctx.config.twitch.channel) {
            ctx.chat.say(
                channel,
                "You can't follow yourself, don't have an ego. 😜",
            );
            return Ok(());
        }

        let cached: Option<FollowageFile> = ctx.store.read(FOLLOWAGE).await?;
        let cached_date = cached.and_then(|file| {
            file.followers
                .get(&target)
                .map(|entry| entry.follow_date)
        });

        let follow_date = match cached_date {
            Some(date) => date,
            None => {
                let Some(user) = ctx.helix.get_user(&target).await? else {
                    ctx.chat.reply(
                        channel,
                        &caller.login,
                        format!("the username \"{}\" was not found.", target),
                    );
                    return Ok(());
                };
                let Some(followed_at) = ctx.helix.get_followed_at(&user.id).await? else {
                    ctx.chat
                        .say(channel, format!("@{} is not following the channel.", target));
                    return Ok(());
                };

                let login = target.clone();
                ctx.store
                    .update(FOLLOWAGE, FollowageFile::default, move |file| {
                        file.followers.insert(
                            login,
                            FollowerEntry {
                                follow_date: followed_at,
                            },
                        );
                    })
                    .await?;
                followed_at
            }
        };

        let days = (Utc::now() - follow_date).num_days().max(0);
        info!("Followage for {}: {} days", target, days);
        ctx.chat.say(
            channel,
            format!("@{} has been following for {} days.", target, days),
        );
        Ok(())
    }
}
