//! Music Playlist - an in-memory playlist engine
//!
//! This library keeps an ordered list of songs with a movable "current
//! song" cursor, imports song lists from text files, and drives both
//! through a small command shell.

pub mod audio;
pub mod import;
pub mod model;
pub mod shell;

pub use model::{AudioHandle, ListEntry, Playlist, PlaylistError, Song};
pub use shell::{Session, SessionConfig};
