//! Broadcaster-only commands

pub mod clearquotes;
pub mod restart;

pub use clearquotes::ClearQuotesCommand;
pub use restart::RestartCommand;
