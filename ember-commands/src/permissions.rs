//! Permission system for chat commands

use tracing::debug;

/// Permission levels for bot commands, ordered lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PermissionLevel {
    /// Any chat user can execute this command
    Viewer = 0,
    /// Moderators and the broadcaster can execute this command
    Moderator = 1,
    /// Only the broadcaster can execute this command
    Broadcaster = 2,
}

impl PermissionLevel {
    /// Get the permission level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionLevel::Viewer => "Viewer",
            PermissionLevel::Moderator => "Moderator",
            PermissionLevel::Broadcaster => "Broadcaster",
        }
    }
}

/// The chat user behind one message, built fresh per event from the
/// badges the platform attaches to it
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    /// Login name (unique per account)
    pub login: String,
    /// Display name as shown in chat
    pub display_name: String,
    /// Broadcaster badge present
    pub is_broadcaster: bool,
    /// Moderator badge present
    pub is_moderator: bool,
}

impl CallerIdentity {
    pub fn new(login: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            display_name: display_name.into(),
            is_broadcaster: false,
            is_moderator: false,
        }
    }

    pub fn with_moderator(mut self) -> Self {
        self.is_moderator = true;
        self
    }

    pub fn with_broadcaster(mut self) -> Self {
        self.is_broadcaster = true;
        self
    }

    /// The highest level implied by the caller's role flags
    ///
    /// Everyone is at least a viewer; absent or malformed badge data
    /// therefore degrades to the lowest privilege instead of a denial.
    pub fn effective_level(&self) -> PermissionLevel {
        if self.is_broadcaster {
            PermissionLevel::Broadcaster
        } else if self.is_moderator {
            PermissionLevel::Moderator
        } else {
            PermissionLevel::Viewer
        }
    }
}

/// Decides whether a caller may invoke a command
#[derive(Debug, Default)]
pub struct PermissionGate;

impl PermissionGate {
    pub fn new() -> Self {
        Self
    }

    /// True iff the caller's effective level reaches the required one
    pub fn allow(&self, caller: &CallerIdentity, required: PermissionLevel) -> bool {
        let effective = caller.effective_level();
        let allowed = effective >= required;
        debug!(
            "Permission check for {}: effective {} against required {} -> {}",
            caller.login,
            effective.as_str(),
            required.as_str(),
            allowed
        );
        allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(PermissionLevel::Viewer < PermissionLevel::Moderator);
        assert!(PermissionLevel::Moderator < PermissionLevel::Broadcaster);
    }

    #[test]
    fn test_viewer_is_never_denied_viewer_commands() {
        let gate = PermissionGate::new();
        let caller = CallerIdentity::new("someone", "Someone");
        assert!(gate.allow(&caller, PermissionLevel::Viewer));
        assert!(!gate.allow(&caller, PermissionLevel::Moderator));
        assert!(!gate.allow(&caller, PermissionLevel::Broadcaster));
    }

    #[test]
    fn test_moderator_implies_viewer() {
        let gate = PermissionGate::new();
        let caller = CallerIdentity::new("mod", "Mod").with_moderator();
        assert!(gate.allow(&caller, PermissionLevel::Viewer));
        assert!(gate.allow(&caller, PermissionLevel::Moderator));
        assert!(!gate.allow(&caller, PermissionLevel::Broadcaster));
    }

    #[test]
    fn test_broadcaster_implies_all_levels() {
        let gate = PermissionGate::new();
        let caller = CallerIdentity::new("streamer", "Streamer").with_broadcaster();
        assert!(gate.allow(&caller, PermissionLevel::Viewer));
        assert!(gate.allow(&caller, PermissionLevel::Moderator));
        assert!(gate.allow(&caller, PermissionLevel::Broadcaster));
    }

    #[test]
    fn test_permission_monotonicity() {
        let gate = PermissionGate::new();
        let callers = [
            CallerIdentity::new("viewer", "Viewer"),
            CallerIdentity::new("mod", "Mod").with_moderator(),
            CallerIdentity::new("streamer", "Streamer").with_broadcaster(),
        ];
        for caller in &callers {
            if gate.allow(caller, PermissionLevel::Broadcaster) {
                assert!(gate.allow(caller, PermissionLevel::Moderator));
            }
            if gate.allow(caller, PermissionLevel::Moderator) {
                assert!(gate.allow(caller, PermissionLevel::Viewer));
            }
        }
    }
}
