//! Periodic Discord promo while the stream is live

use ember_commands::CommandContext;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Post the Discord invite on an interval, but only while live
///
/// Runs for the life of the process; the main task aborts it on
/// shutdown. Disabled when the interval or the invite is unset.
pub async fn run(ctx: Arc<CommandContext>) {
    let minutes = ctx.config.bot.promo_interval_minutes;
    let invite = ctx.config.bot.discord_invite.clone();
    if minutes == 0 || invite.is_empty() {
        debug!("Discord promo task disabled");
        return;
    }

    let mut interval = tokio::time::interval(Duration::from_secs(minutes * 60));
    // The first tick fires immediately; skip it so the promo starts one
    // full interval after connect
    interval.tick().await;

    loop {
        interval.tick().await;
        match ctx.helix.get_stream().await {
            Ok(Some(_)) => {
                ctx.chat.say(
                    &ctx.config.twitch.channel,
                    format!("Join the Discord today: {}", invite),
                );
            }
            Ok(None) => {
                debug!("Channel is not live, skipping Discord promo");
            }
            Err(err) => {
                warn!("Could not check stream status: {}", err);
            }
        }
    }
}
