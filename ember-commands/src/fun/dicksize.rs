//! The obligatory joke measurement command

use crate::command::{Category, Command};
use crate::context::CommandContext;
use crate::permissions::CallerIdentity;
use async_trait::async_trait;
use ember_common::Result;
use rand::Rng;
use std::time::Duration;

const TIERS: [&str; 7] = [
    "Tiny Twig 🌱",
    "Little Sprout 🌿",
    "Average Stick 🌳",
    "Decent Branch 🌴",
    "Impressive Log 🪵",
    "Mighty Trunk 🌳",
    "Colossal Canopy 🌲",
];

const MAX_CM: u32 = 35;

pub struct DicksizeCommand;

#[async_trait]
impl Command for DicksizeCommand {
    fn name(&self) -> &'static str {
        "dicksize"
    }

    fn description(&self) -> &'static str {
        "Get your size in cm with a funny rank."
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
        let cm = {
            let mut rng = rand::thread_rng();
            rng.gen_range(1..=MAX_CM)
        };
        let tier = TIERS[((cm - 1) as usize * TIERS.len()) / MAX_CM as usize];
        ctx.chat.reply(
            channel,
            &caller.login,
            format!("you're packing {} cm: {}", cm, tier),
        );
        Ok(())
    }
}
