//! General-purpose commands

pub mod commands;
pub mod discord;
pub mod followage;
pub mod uptime;

pub use commands::CommandsCommand;
pub use discord::DiscordCommand;
pub use followage::FollowageCommand;
pub use uptime::UptimeCommand;
