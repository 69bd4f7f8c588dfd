use thiserror::Error;

/// Recoverable outcomes of playlist operations
///
/// The playlist is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    /// There is no current song
    #[error("Playlist is empty.")]
    EmptyPlaylist,

    /// The cursor is already on the last song
    #[error("End of playlist. No next song.")]
    EndOfPlaylist,

    /// The cursor is already on the first song
    #[error("Already at the beginning of the playlist.")]
    AtStart,

    /// No song carries the requested title
    #[error("Song '{0}' not found in the playlist.")]
    NotFound(String),
}
