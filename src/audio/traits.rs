//! Audio rendering trait definitions

use crate::model::{AudioHandle, Song};
use anyhow::Result;

/// Audio renderer trait - allows swapping the playback backend
///
/// Rendering is a hand-off: implementations start playback and return
/// without waiting for the audio to finish.
pub trait AudioRenderer {
    /// Start rendering the audio referenced by `handle` for `song`
    fn render(&self, song: &Song, handle: &AudioHandle) -> Result<()>;
}

impl<R: AudioRenderer + ?Sized> AudioRenderer for Box<R> {
    fn render(&self, song: &Song, handle: &AudioHandle) -> Result<()> {
        (**self).render(song, handle)
    }
}
