//! Shell session configuration

use std::path::PathBuf;

/// Configuration for an interactive playlist session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Play the current song after every `next`/`prev`
    pub autoplay: bool,

    /// Marker printed in front of the current song in listings
    pub current_marker: String,

    /// Song lists imported before the first command is read
    pub startup_imports: Vec<PathBuf>,
}

impl SessionConfig {
    /// Create a new session configuration with defaults
    pub fn new() -> Self {
        Self {
            autoplay: true,
            current_marker: String::from("▶"),
            startup_imports: Vec::new(),
        }
    }

    /// Enable or disable autoplay after navigation
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Set the current-song marker
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.current_marker = marker.into();
        self
    }

    /// Set song lists to import at start-up
    pub fn with_imports(mut self, imports: Vec<PathBuf>) -> Self {
        self.startup_imports = imports;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
