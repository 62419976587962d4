//! Resolving raw chat text to a registered command

use crate::command::Command;
use crate::registry::CommandRegistry;
use std::sync::Arc;
use tracing::debug;

/// A resolved command together with the arguments it should receive
pub struct Invocation {
    pub command: Arc<dyn Command>,
    /// Remaining tokens for name/alias hits, the whole message for
    /// keyword hits
    pub args: String,
}

/// Maps raw chat text onto registered commands
///
/// Priority order, first match wins: canonical name, then alias (both
/// require the trigger prefix), then keyword substring scan over the
/// original untouched message.
#[derive(Debug, Clone, Copy)]
pub struct CommandResolver {
    prefix: char,
}

impl CommandResolver {
    pub fn new(prefix: char) -> Self {
        Self { prefix }
    }

    pub fn resolve(&self, registry: &CommandRegistry, raw: &str) -> Option<Invocation> {
        if let Some(stripped) = raw.strip_prefix(self.prefix) {
            let mut tokens = stripped.split_whitespace();
            if let Some(first) = tokens.next() {
                let candidate = first.to_lowercase();
                let rest = tokens.collect::<Vec<_>>().join(" ");

                if let Some(command) = registry.by_name(&candidate) {
                    debug!("Resolved '{}' by name", candidate);
                    return Some(Invocation {
                        command,
                        args: rest,
                    });
                }
                if let Some(command) = registry.by_alias(&candidate) {
                    debug!("Resolved '{}' by alias", candidate);
                    return Some(Invocation {
                        command,
                        args: rest,
                    });
                }
            }
        }

        self.resolve_keyword(registry, raw)
    }

    /// Scan every command's keywords against the full message,
    /// case-insensitively, in registration order
    fn resolve_keyword(&self, registry: &CommandRegistry, raw: &str) -> Option<Invocation> {
        if raw.is_empty() {
            return None;
        }
        let lowered = raw.to_lowercase();
        for command in registry.all() {
            for keyword in command.keywords() {
                if lowered.contains(&keyword.to_lowercase()) {
                    debug!("Resolved '{}' by keyword '{}'", command.name(), keyword);
                    return Some(Invocation {
                        command: command.clone(),
                        args: raw.to_string(),
                    });
                }
            }
        }
        None
    }
}
