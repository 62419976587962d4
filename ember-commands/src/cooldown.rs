//! Cooldown tracking for rate limiting command usage

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during cooldown acquisition
#[derive(Error, Debug)]
pub enum CooldownError {
    #[error("'{}' is on cooldown for command '{}' (remaining: {}s)", .login, .command, .remaining.as_secs())]
    OnCooldown {
        command: String,
        login: String,
        /// Exact time left until the window reopens
        remaining: Duration,
    },
}

impl CooldownError {
    /// Remaining wait rounded up to whole seconds, for chat replies
    pub fn remaining_secs(&self) -> u64 {
        let CooldownError::OnCooldown { remaining, .. } = self;
        remaining.as_millis().div_ceil(1000) as u64
    }
}

/// Per-(command, user) rate limiter shared by all in-flight dispatches
///
/// Entries are never evicted; growth is bounded by the number of
/// distinct (command, user) pairs seen over the process lifetime.
#[derive(Debug, Default)]
pub struct CooldownTracker {
    last_used: DashMap<(String, String), Instant>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self {
            last_used: DashMap::new(),
        }
    }

    /// Accept or reject an invocation attempt for one (command, user) pair
    ///
    /// On acceptance the stored timestamp advances to `now`; the read and
    /// the write happen under the map's entry guard, so two concurrent
    /// attempts for the same pair can never both pass within one window.
    /// A rejected attempt leaves the stored timestamp untouched.
    pub fn try_acquire(
        &self,
        command: &str,
        login: &str,
        cooldown: Duration,
        now: Instant,
    ) -> Result<(), CooldownError> {
        let key = (command.to_string(), login.to_string());
        match self.last_used.entry(key) {
            Entry::Occupied(mut entry) => {
                let elapsed = now.saturating_duration_since(*entry.get());
                if elapsed >= cooldown {
                    entry.insert(now);
                    Ok(())
                } else {
                    let remaining = cooldown - elapsed;
                    debug!(
                        "'{}' hit the {} cooldown with {}ms remaining",
                        login,
                        command,
                        remaining.as_millis()
                    );
                    Err(CooldownError::OnCooldown {
                        command: command.to_string(),
                        login: login.to_string(),
                        remaining,
                    })
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(now);
                Ok(())
            }
        }
    }

    /// Number of (command, user) pairs currently tracked
    pub fn tracked_pairs(&self) -> usize {
        self.last_used.len()
    }
}
