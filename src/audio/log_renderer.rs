//! Renderer that only records the hand-off in the log
//!
//! Used by the command line shell, which has no audio output of its own.

use super::traits::AudioRenderer;
use crate::model::{AudioHandle, Song};
use anyhow::Result;

/// Renderer that logs each hand-off instead of producing sound
pub struct LogRenderer;

impl LogRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioRenderer for LogRenderer {
    fn render(&self, song: &Song, handle: &AudioHandle) -> Result<()> {
        log::info!("Rendering {} from {}", song, handle);
        Ok(())
    }
}
