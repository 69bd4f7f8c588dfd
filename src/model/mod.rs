//! Playlist data model
//!
//! This module defines the song record and the playlist engine that owns
//! the chain of songs and the "current song" cursor.

mod error;
mod playlist;
mod song;

pub use error::PlaylistError;
pub use playlist::{Iter, ListEntry, Playlist};
pub use song::{AudioHandle, Song};
