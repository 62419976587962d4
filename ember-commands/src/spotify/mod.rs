//! Spotify commands

pub mod songrequest;

pub use songrequest::SongRequestCommand;
