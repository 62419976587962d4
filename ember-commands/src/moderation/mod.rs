//! Moderator-gated commands

pub mod delquote;
pub mod runad;
pub mod setgame;
pub mod settitle;

pub use delquote::DelQuoteCommand;
pub use runad::RunAdCommand;
pub use setgame::SetGameCommand;
pub use settitle::SetTitleCommand;
