//! The per-event dispatch pipeline
//!
//! One inbound chat message runs through self-echo suppression,
//! resolution, the permission gate, the cooldown tracker and finally the
//! command's `execute`. Unknown input is ignored silently; denials and
//! cooldowns get a reply; execution failures are absorbed here and
//! answered with a generic apology so no command can take the bot down.

use crate::context::CommandContext;
use crate::cooldown::CooldownTracker;
use crate::permissions::{CallerIdentity, PermissionGate};
use crate::registry::CommandRegistry;
use crate::resolver::CommandResolver;
use ember_common::EmberError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Orchestrates the dispatch pipeline for inbound chat events
///
/// The registry is read-only after startup and the cooldown tracker does
/// its own synchronization, so one dispatcher instance serves any number
/// of concurrently spawned pipelines.
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    resolver: CommandResolver,
    gate: PermissionGate,
    cooldowns: CooldownTracker,
    ctx: Arc<CommandContext>,
    bot_login: String,
    execution_timeout: Option<Duration>,
}

impl Dispatcher {
    pub fn new(registry: Arc<CommandRegistry>, ctx: Arc<CommandContext>) -> Self {
        let timeout_secs = ctx.config.bot.execution_timeout_seconds;
        Self {
            registry,
            resolver: CommandResolver::new(ctx.config.bot.prefix),
            gate: PermissionGate::new(),
            cooldowns: CooldownTracker::new(),
            bot_login: ctx.config.twitch.bot_username.to_lowercase(),
            execution_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            ctx,
        }
    }

    /// Run the full pipeline for one chat message
    ///
    /// The caller (the transport loop) spawns this per message, so a slow
    /// command never delays unrelated chat events.
    pub async fn dispatch(
        &self,
        channel: &str,
        caller: &CallerIdentity,
        message: &str,
        is_self: bool,
    ) {
        // The bot must never answer its own messages
        if is_self || caller.login.eq_ignore_ascii_case(&self.bot_login) {
            return;
        }

        debug!("Received message from {}: {}", caller.login, message);

        let Some(invocation) = self.resolver.resolve(&self.registry, message) else {
            // Unknown input stays silent so chat is not polluted
            return;
        };
        let command = invocation.command.clone();

        if !self.gate.allow(caller, command.required_permission()) {
            info!(
                "Denied '{}' for {} (requires {})",
                command.name(),
                caller.login,
                command.required_permission().as_str()
            );
            self.ctx.chat.reply(
                channel,
                &caller.login,
                "you don't have permission to use this command. 🚫",
            );
            return;
        }

        if let Err(err) =
            self.cooldowns
                .try_acquire(command.name(), &caller.login, command.cooldown(), Instant::now())
        {
            info!(
                "'{}' is on cooldown for {} ({}s left)",
                command.name(),
                caller.login,
                err.remaining_secs()
            );
            self.ctx.chat.reply(
                channel,
                &caller.login,
                format!(
                    "please wait {} more seconds before using the {} command again. 🕒",
                    err.remaining_secs(),
                    command.name()
                ),
            );
            return;
        }

        info!("Executing command '{}' for {}", command.name(), caller.login);
        let execution = command.execute(&self.ctx, channel, caller, &invocation.args);
        let result = match self.execution_timeout {
            Some(timeout) => match tokio::time::timeout(timeout, execution).await {
                Ok(result) => result,
                Err(_) => Err(EmberError::new(format!(
                    "execution exceeded {}s",
                    timeout.as_secs()
                ))),
            },
            None => execution.await,
        };

        if let Err(err) = result {
            error!("Error executing command {}: {}", command.name(), err);
            self.ctx.chat.reply(
                channel,
                &caller.login,
                "something went wrong while running that command. ❌",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::OutboundMessage;
    use crate::command::{Category, Command};
    use crate::context::test_support::test_context;
    use crate::permissions::PermissionLevel;
    use async_trait::async_trait;
    use ember_common::Result;
    use tokio::sync::mpsc::UnboundedReceiver;

    struct EchoCommand;

    #[async_trait]
    impl Command for EchoCommand {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn description(&self) -> &'static str {
            "repeats the arguments"
        }

        fn category(&self) -> Category {
            Category::Fun
        }

        async fn execute(
            &self,
            ctx: &CommandContext,
            channel: &str,
            _caller: &CallerIdentity,
            args: &str,
        ) -> Result<()> {
            ctx.chat.say(channel, args);
            Ok(())
        }
    }

    struct FailingCommand;

    #[async_trait]
    impl Command for FailingCommand {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn description(&self) -> &'static str {
            "always fails"
        }

        fn category(&self) -> Category {
            Category::Fun
        }

        async fn execute(
            &self,
            _ctx: &CommandContext,
            _channel: &str,
            _caller: &CallerIdentity,
            _args: &str,
        ) -> Result<()> {
            Err(EmberError::new("exploded on purpose"))
        }
    }

    struct ModOnlyCommand;

    #[async_trait]
    impl Command for ModOnlyCommand {
        fn name(&self) -> &'static str {
            "modonly"
        }

        fn description(&self) -> &'static str {
            "requires moderator"
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
            _caller: &CallerIdentity,
            _args: &str,
        ) -> Result<()> {
            ctx.chat.say(channel, "mod action done");
            Ok(())
        }
    }

    struct SlowGreeting;

    #[async_trait]
    impl Command for SlowGreeting {
        fn name(&self) -> &'static str {
            "greet"
        }

        fn description(&self) -> &'static str {
            "greets with a cooldown"
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
            _args: &str,
        ) -> Result<()> {
            ctx.chat.reply(channel, &caller.login, "hello!");
            Ok(())
        }
    }

    fn dispatcher_with(
        commands: Vec<Arc<dyn Command>>,
    ) -> (
        Dispatcher,
        UnboundedReceiver<OutboundMessage>,
        tempfile::TempDir,
    ) {
        let (ctx, rx, dir) = test_context();
        let mut registry = CommandRegistry::new();
        for command in commands {
            registry.register(command).unwrap();
        }
        (Dispatcher::new(Arc::new(registry), ctx), rx, dir)
    }

    fn drain(rx: &mut UnboundedReceiver<OutboundMessage>) -> Vec<OutboundMessage> {
        let mut messages = Vec::new();
        while let Ok(message) = rx.try_recv() {
            messages.push(message);
        }
        messages
    }

    #[tokio::test]
    async fn test_echo_scenario() {
        let (dispatcher, mut rx, _dir) = dispatcher_with(vec![Arc::new(EchoCommand)]);
        let caller = CallerIdentity::new("viewer", "Viewer");

        dispatcher.dispatch("streamer", &caller, "!echo hi", false).await;

        let replies = drain(&mut rx);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].text, "hi");
        assert_eq!(replies[0].channel, "streamer");
    }

    #[tokio::test]
    async fn test_unknown_command_is_silent() {
        let (dispatcher, mut rx, _dir) = dispatcher_with(vec![Arc::new(EchoCommand)]);
        let caller = CallerIdentity::new("viewer", "Viewer");

        dispatcher.dispatch("streamer", &caller, "!nonexistent", false).await;
        dispatcher.dispatch("streamer", &caller, "", false).await;

        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_self_messages_are_ignored() {
        let (dispatcher, mut rx, _dir) = dispatcher_with(vec![Arc::new(EchoCommand)]);
        let bot = CallerIdentity::new("emberbot", "EmberBot");
        let caller = CallerIdentity::new("viewer", "Viewer");

        // Flagged by the transport
        dispatcher.dispatch("streamer", &caller, "!echo hi", true).await;
        // Recognized by login even without the flag
        dispatcher.dispatch("streamer", &bot, "!echo hi", false).await;

        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_permission_denial_is_reported() {
        let (dispatcher, mut rx, _dir) = dispatcher_with(vec![Arc::new(ModOnlyCommand)]);
        let caller = CallerIdentity::new("viewer", "Viewer");

        dispatcher.dispatch("streamer", &caller, "!modonly", false).await;

        let replies = drain(&mut rx);
        assert_eq!(replies.len(), 1);
        assert!(replies[0].text.contains("@viewer"));
        assert!(replies[0].text.contains("permission"));
    }

    #[tokio::test]
    async fn test_moderator_passes_the_gate() {
        let (dispatcher, mut rx, _dir) = dispatcher_with(vec![Arc::new(ModOnlyCommand)]);
        let caller = CallerIdentity::new("mod", "Mod").with_moderator();

        dispatcher.dispatch("streamer", &caller, "!modonly", false).await;

        let replies = drain(&mut rx);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].text, "mod action done");
    }

    #[tokio::test]
    async fn test_cooldown_denial_is_reported() {
        let (dispatcher, mut rx, _dir) = dispatcher_with(vec![Arc::new(SlowGreeting)]);
        let caller = CallerIdentity::new("viewer", "Viewer");

        dispatcher.dispatch("streamer", &caller, "!greet", false).await;
        dispatcher.dispatch("streamer", &caller, "!greet", false).await;

        let replies = drain(&mut rx);
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].text, "@viewer, hello!");
        assert!(replies[1].text.contains("please wait"));
        assert!(replies[1].text.contains("greet"));
    }

    #[tokio::test]
    async fn test_cooldowns_are_per_user() {
        let (dispatcher, mut rx, _dir) = dispatcher_with(vec![Arc::new(SlowGreeting)]);
        let first = CallerIdentity::new("first", "First");
        let second = CallerIdentity::new("second", "Second");

        dispatcher.dispatch("streamer", &first, "!greet", false).await;
        dispatcher.dispatch("streamer", &second, "!greet", false).await;

        let replies = drain(&mut rx);
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].text, "@first, hello!");
        assert_eq!(replies[1].text, "@second, hello!");
    }

    #[tokio::test]
    async fn test_failure_isolation_between_commands() {
        let (dispatcher, mut rx, _dir) =
            dispatcher_with(vec![Arc::new(FailingCommand), Arc::new(EchoCommand)]);
        let caller = CallerIdentity::new("viewer", "Viewer");

        // The failing command must not prevent the next dispatch
        dispatcher.dispatch("streamer", &caller, "!broken", false).await;
        dispatcher.dispatch("streamer", &caller, "!echo still alive", false).await;

        let replies = drain(&mut rx);
        assert_eq!(replies.len(), 2);
        assert!(replies[0].text.contains("something went wrong"));
        assert_eq!(replies[1].text, "still alive");
    }

    struct HangingCommand;

    #[async_trait]
    impl Command for HangingCommand {
        fn name(&self) -> &'static str {
            "hang"
        }

        fn description(&self) -> &'static str {
            "never finishes"
        }

        fn category(&self) -> Category {
            Category::Fun
        }

        async fn execute(
            &self,
            _ctx: &CommandContext,
            _channel: &str,
            _caller: &CallerIdentity,
            _args: &str,
        ) -> Result<()> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_command_is_reported_as_a_normal_failure() {
        use ember_config::Config;

        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.bot.data_dir = dir.path().to_string_lossy().to_string();
        config.bot.execution_timeout_seconds = 1;
        config.twitch.bot_username = "emberbot".to_string();

        let (chat, mut rx) = crate::chat::ChatSender::channel();
        let ctx = Arc::new(CommandContext::new(Arc::new(config), chat).unwrap());
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(HangingCommand)).unwrap();
        let dispatcher = Dispatcher::new(Arc::new(registry), ctx);

        let caller = CallerIdentity::new("viewer", "Viewer");
        dispatcher.dispatch("streamer", &caller, "!hang", false).await;

        let replies = drain(&mut rx);
        assert_eq!(replies.len(), 1);
        assert!(replies[0].text.contains("something went wrong"));
    }

    #[tokio::test]
    async fn test_execution_failure_reply_differs_from_denials() {
        let (dispatcher, mut rx, _dir) = dispatcher_with(vec![Arc::new(FailingCommand)]);
        let caller = CallerIdentity::new("viewer", "Viewer");

        dispatcher.dispatch("streamer", &caller, "!broken", false).await;

        let replies = drain(&mut rx);
        assert_eq!(replies.len(), 1);
        assert!(!replies[0].text.contains("permission"));
        assert!(!replies[0].text.contains("please wait"));
    }
}
