//! Fun commands

pub mod addquote;
pub mod clip;
pub mod dicksize;
pub mod eightball;
pub mod joke;
pub mod quote;

pub use addquote::AddQuoteCommand;
pub use clip::ClipCommand;
pub use dicksize::DicksizeCommand;
pub use eightball::EightBallCommand;
pub use joke::JokeCommand;
pub use quote::QuoteCommand;
