use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque reference to playable audio for a song
///
/// The playlist never opens or interprets it; it is only handed to an
/// [`AudioRenderer`](crate::audio::AudioRenderer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioHandle {
    location: PathBuf,
}

impl AudioHandle {
    /// Create a handle pointing at an audio location
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Location the handle was created from
    pub fn location(&self) -> &Path {
        &self.location
    }
}

impl fmt::Display for AudioHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.location.display())
    }
}

/// A single track in a playlist
///
/// Fields are fixed once the song is appended; the chain link lives in the
/// playlist, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Song {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Audio to play for this song (optional)
    pub audio: Option<AudioHandle>,
}

impl Song {
    /// Create a song without attached audio
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            audio: None,
        }
    }

    /// Attach an audio handle
    pub fn with_audio(mut self, audio: AudioHandle) -> Self {
        self.audio = Some(audio);
        self
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_form() {
        let song = Song::new("Blue Monday", "New Order");
        assert_eq!(song.to_string(), "Blue Monday by New Order");
    }

    #[test]
    fn test_audio_is_optional() {
        let song = Song::new("Title", "Artist");
        assert!(song.audio.is_none());

        let song = song.with_audio(AudioHandle::new("/music/track.mp3"));
        assert_eq!(
            song.audio.as_ref().map(|a| a.location()),
            Some(Path::new("/music/track.mp3"))
        );
    }
}
