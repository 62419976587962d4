//! Command resolution and dispatch pipeline for the Ember Twitch bot
//!
//! The pipeline runs one chat event at a time through resolution
//! (name, then alias, then keyword), the permission gate, the cooldown
//! tracker and finally the command's own `execute`, isolating every
//! command failure at the dispatcher boundary.

pub mod broadcaster;
pub mod chat;
pub mod command;
pub mod context;
pub mod cooldown;
pub mod datasets;
pub mod dispatcher;
pub mod fun;
pub mod general;
pub mod league;
pub mod manifest;
pub mod moderation;
pub mod permissions;
pub mod registry;
pub mod resolver;
pub mod spotify;

pub use chat::{ChatSender, OutboundMessage};
pub use command::{Category, Command};
pub use context::CommandContext;
pub use cooldown::{CooldownError, CooldownTracker};
pub use dispatcher::Dispatcher;
pub use permissions::{CallerIdentity, PermissionGate, PermissionLevel};
pub use registry::{CommandRegistry, RegistryError};
pub use resolver::{CommandResolver, Invocation};
