//! Ember Twitch Bot - Main Entry Point

use anyhow::Result;
use clap::Parser;
use ember_commands::{manifest, CallerIdentity, ChatSender, CommandContext, CommandRegistry, Dispatcher};
use ember_common::logging::{init_logging, LoggingConfig};
use ember_config::ConfigLoader;
use std::sync::Arc;
use tracing::{error, info, warn};
use twitch_irc::login::StaticLoginCredentials;
use twitch_irc::message::{PrivmsgMessage, ServerMessage};
use twitch_irc::{ClientConfig, SecureTCPTransport, TwitchIRCClient};

mod promo;

type IrcClient = TwitchIRCClient<SecureTCPTransport, StaticLoginCredentials>;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Log level, overriding the configured one
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let config = Arc::new(config);

    // Initialize logging
    let logging = LoggingConfig {
        level: args
            .log_level
            .clone()
            .unwrap_or_else(|| config.logging.level.clone()),
        file_path: config.logging.file.clone(),
        ..LoggingConfig::default()
    };
    init_logging(&logging).map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Starting Ember bot...");

    // Outbound chat queue and shared command context
    let (chat, outbound) = ChatSender::channel();
    let ctx = Arc::new(CommandContext::new(config.clone(), chat.clone())?);

    // Load the command manifest
    let mut registry = CommandRegistry::new();
    manifest::load_builtins(&mut registry);
    ctx.set_command_listing(registry.public_listing(config.bot.prefix));
    info!("{} commands registered", registry.len());

    let dispatcher = Arc::new(Dispatcher::new(Arc::new(registry), ctx.clone()));

    // Connect to Twitch chat
    let credentials = StaticLoginCredentials::new(
        config.twitch.bot_username.clone(),
        Some(config.twitch.bot_token.clone()),
    );
    let (mut incoming, client) = IrcClient::new(ClientConfig::new_simple(credentials));
    client.join(config.twitch.channel.clone())?;
    info!("Joined channel {}", config.twitch.channel);

    // Writer task draining the outbound queue into the IRC client
    let writer_client = client.clone();
    let writer = tokio::spawn(async move {
        let mut outbound = outbound;
        while let Some(message) = outbound.recv().await {
            if let Err(err) = writer_client.say(message.channel, message.text).await {
                error!("Failed to send chat message: {}", err);
            }
        }
    });

    // Announce the bot in chat
    chat.say(
        &config.twitch.channel,
        "Hello chat! 🤖 The bot is now online and ready to assist you. ✨",
    );

    // Periodic Discord promo while the stream is live
    let promo_task = tokio::spawn(promo::run(ctx.clone()));

    // Message loop: one dispatch task per inbound message, so slow
    // commands never hold up the rest of chat
    let loop_ctx = ctx.clone();
    let loop_config = config.clone();
    let message_loop = tokio::spawn(async move {
        while let Some(message) = incoming.recv().await {
            match message {
                ServerMessage::Privmsg(msg) => {
                    if loop_config.bot.welcome_first_chatters && is_first_message(&msg) {
                        loop_ctx.chat.say(
                            &msg.channel_login,
                            format!("Welcome {}! 🎉 Thanks for joining us!", msg.sender.name),
                        );
                    }
                    let dispatcher = dispatcher.clone();
                    tokio::spawn(async move {
                        let caller = caller_from(&msg);
                        dispatcher
                            .dispatch(&msg.channel_login, &caller, &msg.message_text, false)
                            .await;
                    });
                }
                ServerMessage::Notice(notice) => {
                    warn!("Server notice: {}", notice.message_text);
                }
                _ => {}
            }
        }
    });

    // Run until ctrl-c or a broadcaster-issued restart
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal, stopping");
        }
        _ = ctx.shutdown.cancelled() => {
            info!("Restart requested from chat, stopping");
        }
    }

    message_loop.abort();
    promo_task.abort();
    writer.abort();
    info!("Ember bot has shut down");
    Ok(())
}

/// Build the caller identity from the message badges
fn caller_from(msg: &PrivmsgMessage) -> CallerIdentity {
    let mut caller = CallerIdentity::new(msg.sender.login.clone(), msg.sender.name.clone());
    for badge in &msg.badges {
        match badge.name.as_str() {
            "broadcaster" => caller.is_broadcaster = true,
            "moderator" => caller.is_moderator = true,
            _ => {}
        }
    }
    caller
}

/// Whether this is the sender's first message in the channel
fn is_first_message(msg: &PrivmsgMessage) -> bool {
    msg.source
        .tags
        .0
        .get("first-msg")
        .and_then(|value| value.as_deref())
        == Some("1")
}
