//! Command registry keyed by canonical name, alias and keyword

use crate::command::Command;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use thiserror::Error;

/// Registration conflicts, raised at startup rather than lookup time
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Command '{0}' is already registered")]
    DuplicateCommand(String),

    #[error("Alias '{alias}' of command '{command}' is already registered")]
    DuplicateAlias { command: String, alias: String },
}

/// Holds every registered command, preserving registration order
///
/// Read-only after startup; lookups take `&self` and are safe to share
/// across concurrent dispatch pipelines.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
    by_name: HashMap<String, usize>,
    by_alias: HashMap<String, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a command under its canonical name and aliases
    ///
    /// Fails without side effects on a duplicate name or alias, so a
    /// conflicting command never ends up half-registered.
    pub fn register(&mut self, command: Arc<dyn Command>) -> Result<(), RegistryError> {
        let name = command.name().to_lowercase();
        if self.by_name.contains_key(&name) {
            return Err(RegistryError::DuplicateCommand(name));
        }
        for alias in command.aliases() {
            let alias = alias.to_lowercase();
            if self.by_alias.contains_key(&alias) {
                return Err(RegistryError::DuplicateAlias {
                    command: name,
                    alias,
                });
            }
        }

        let index = self.commands.len();
        for alias in command.aliases() {
            self.by_alias.insert(alias.to_lowercase(), index);
        }
        self.by_name.insert(name, index);
        self.commands.push(command);
        Ok(())
    }

    /// Look up a command by canonical name
    pub fn by_name(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&index| self.commands[index].clone())
    }

    /// Look up a command by alias
    pub fn by_alias(&self, alias: &str) -> Option<Arc<dyn Command>> {
        self.by_alias
            .get(&alias.to_lowercase())
            .map(|&index| self.commands[index].clone())
    }

    /// All commands in registration order
    pub fn all(&self) -> &[Arc<dyn Command>] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Chat-sized listing of public commands grouped by category
    ///
    /// Moderation and broadcaster commands are omitted; the result is
    /// clamped to the 255 characters a single chat line may carry.
    pub fn public_listing(&self, prefix: char) -> String {
        let mut categories: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for command in &self.commands {
            if command.category().is_public() {
                categories
                    .entry(command.category().as_str())
                    .or_default()
                    .push(format!("{}{}", prefix, command.name()));
            }
        }

        let mut listing = categories
            .into_iter()
            .map(|(category, mut commands)| {
                commands.sort();
                format!("{}: {}", category, commands.join(", "))
            })
            .collect::<Vec<_>>()
            .join(" | ");
        if listing.len() > 255 {
            listing.truncate(252);
            listing.push_str("...");
        }
        listing
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.commands.len())
            .field("aliases", &self.by_alias.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Category;
    use crate::context::CommandContext;
    use crate::permissions::CallerIdentity;
    use async_trait::async_trait;
    use ember_common::Result;

    struct StubCommand {
        name: &'static str,
        aliases: &'static [&'static str],
        category: Category,
    }

    #[async_trait]
    impl Command for StubCommand {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            "a stub"
        }

        fn aliases(&self) -> &'static [&'static str] {
            self.aliases
        }

        fn category(&self) -> Category {
            self.category
        }

        async fn execute(
            &self,
            _ctx: &CommandContext,
            _channel: &str,
            _caller: &CallerIdentity,
            _args: &str,
        ) -> Result<()> {
            Ok(())
        }
    }

    fn stub(name: &'static str, aliases: &'static [&'static str]) -> Arc<dyn Command> {
        Arc::new(StubCommand {
            name,
            aliases,
            category: Category::General,
        })
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = CommandRegistry::new();
        registry.register(stub("quote", &["randomquote"])).unwrap();

        assert!(registry.by_name("quote").is_some());
        assert!(registry.by_name("QUOTE").is_some());
        assert!(registry.by_alias("randomquote").is_some());
        assert!(registry.by_name("randomquote").is_none());
        assert!(registry.by_alias("quote").is_none());
    }

    #[test]
    fn test_duplicate_name_keeps_first_registration() {
        let mut registry = CommandRegistry::new();
        registry.register(stub("quote", &[])).unwrap();

        let err = registry.register(stub("quote", &["other"])).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateCommand(_)));
        assert_eq!(registry.len(), 1);
        // The loser must not have left alias entries behind
        assert!(registry.by_alias("other").is_none());
    }

    #[test]
    fn test_duplicate_alias_is_rejected() {
        let mut registry = CommandRegistry::new();
        registry.register(stub("quote", &["rq"])).unwrap();

        let err = registry.register(stub("joke", &["rq"])).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateAlias { .. }));
        assert!(registry.by_name("joke").is_none());
    }

    #[test]
    fn test_all_preserves_registration_order() {
        let mut registry = CommandRegistry::new();
        registry.register(stub("zeta", &[])).unwrap();
        registry.register(stub("alpha", &[])).unwrap();

        let names: Vec<&str> = registry.all().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_public_listing_hides_privileged_categories() {
        let mut registry = CommandRegistry::new();
        registry.register(stub("joke", &[])).unwrap();
        registry
            .register(Arc::new(StubCommand {
                name: "runad",
                aliases: &[],
                category: Category::Moderation,
            }))
            .unwrap();

        let listing = registry.public_listing('!');
        assert!(listing.contains("!joke"));
        assert!(!listing.contains("!runad"));
    }
}
