//! Command execution against a single playlist

use super::command::{Command, USAGE};
use super::config::SessionConfig;
use crate::audio::AudioRenderer;
use crate::import::{self, ImportGuard};
use crate::model::{AudioHandle, Playlist, PlaylistError};
use std::fmt;
use std::path::Path;

/// Kind of a feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

/// A message for the user produced by a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub level: Level,
    pub message: String,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Level::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.level {
            Level::Success => "✔",
            Level::Info => "·",
            Level::Warning => "!",
            Level::Error => "✘",
        };
        write!(f, "{} {}", prefix, self.message)
    }
}

/// One playlist plus everything the shell keeps around it
///
/// The session turns engine outcomes into [`Feedback`]; the playlist itself
/// never produces user-facing messages.
pub struct Session<R: AudioRenderer> {
    config: SessionConfig,
    playlist: Playlist,
    renderer: R,
    imports: ImportGuard,
}

impl<R: AudioRenderer> Session<R> {
    /// Create a session with an empty playlist
    pub fn new(config: SessionConfig, renderer: R) -> Self {
        Self {
            config,
            playlist: Playlist::new(),
            renderer,
            imports: ImportGuard::new(),
        }
    }

    /// The playlist driven by this session
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Import the song lists named in the configuration
    pub fn startup(&mut self) -> Vec<Feedback> {
        let paths = self.config.startup_imports.clone();
        paths.iter().flat_map(|path| self.import(path)).collect()
    }

    /// Run one command
    pub fn execute(&mut self, command: Command) -> Vec<Feedback> {
        log::debug!("Executing {:?}", command);

        match command {
            Command::Add {
                title,
                artist,
                audio,
            } => self.add(title, artist, audio.map(AudioHandle::new)),
            Command::Remove(title) => self.remove(&title),
            Command::Next => self.navigate(Playlist::advance),
            Command::Prev => self.navigate(Playlist::retreat),
            Command::Play => self.play(),
            Command::Current => vec![match self.playlist.current() {
                Some(song) => Feedback::info(format!("Current: {}", song)),
                None => Feedback::info(PlaylistError::EmptyPlaylist.to_string()),
            }],
            Command::List { json } => self.list(json),
            Command::Length => vec![Feedback::info(format!(
                "Total songs in playlist: {} song(s)",
                self.playlist.len()
            ))],
            Command::Import(path) => self.import(&path),
            Command::Export(path) => self.export(&path),
            Command::Reset => self.reset(),
            Command::Help => USAGE.iter().map(|usage| Feedback::info(*usage)).collect(),
            Command::Quit => Vec::new(),
        }
    }

    fn add(&mut self, title: String, artist: String, audio: Option<AudioHandle>) -> Vec<Feedback> {
        if title.is_empty() || artist.is_empty() {
            return vec![Feedback::warning("Please enter both title and artist.")];
        }

        let message = format!("Added: {} by {}", title, artist);
        self.playlist.append(title, artist, audio);
        vec![Feedback::success(message)]
    }

    fn remove(&mut self, title: &str) -> Vec<Feedback> {
        if self.playlist.is_empty() {
            return vec![Feedback::error(format!(
                "Cannot delete '{}'. Playlist is empty.",
                title
            ))];
        }

        match self.playlist.remove(title) {
            Ok(song) => vec![Feedback::success(format!("Deleted: {}", song.title))],
            Err(e) => vec![Feedback::error(e.to_string())],
        }
    }

    fn navigate(&mut self, step: fn(&mut Playlist) -> Result<(), PlaylistError>) -> Vec<Feedback> {
        let mut feedback = Vec::new();

        match step(&mut self.playlist) {
            Ok(()) => {}
            Err(PlaylistError::EmptyPlaylist) => {
                return vec![Feedback::warning(PlaylistError::EmptyPlaylist.to_string())];
            }
            Err(e) => feedback.push(Feedback::warning(e.to_string())),
        }

        if self.config.autoplay {
            feedback.extend(self.play());
        } else if let Some(song) = self.playlist.current() {
            feedback.push(Feedback::info(format!("Current: {}", song)));
        }

        feedback
    }

    /// Hand the current song's audio to the renderer
    fn play(&self) -> Vec<Feedback> {
        let Some(song) = self.playlist.current() else {
            return vec![Feedback::warning(PlaylistError::EmptyPlaylist.to_string())];
        };

        let mut feedback = vec![Feedback::info(format!("Now playing: {}", song))];
        match &song.audio {
            Some(handle) => {
                if let Err(e) = self.renderer.render(song, handle) {
                    log::warn!("Renderer failed for {}: {:#}", song, e);
                    feedback.push(Feedback::warning(format!("Could not play {}: {:#}", song, e)));
                }
            }
            None => feedback.push(Feedback::warning(format!("No audio attached to {}.", song))),
        }

        feedback
    }

    fn list(&self, json: bool) -> Vec<Feedback> {
        let entries = self.playlist.list();

        if json {
            return match serde_json::to_string_pretty(&entries) {
                Ok(text) => vec![Feedback::info(text)],
                Err(e) => vec![Feedback::error(format!("Failed to encode playlist: {}", e))],
            };
        }

        if entries.is_empty() {
            return vec![Feedback::info("Playlist is empty. Add some songs!")];
        }

        let marker = &self.config.current_marker;
        let padding = " ".repeat(marker.chars().count());
        entries
            .iter()
            .map(|entry| {
                let prefix = if entry.is_current { marker } else { &padding };
                Feedback::info(format!("{} {}", prefix, entry))
            })
            .collect()
    }

    fn import(&mut self, path: &Path) -> Vec<Feedback> {
        if self.imports.contains(path) {
            return vec![Feedback::warning(format!(
                "Already imported {}; reset the playlist to import it again.",
                path.display()
            ))];
        }

        match import::import_file(&mut self.playlist, path) {
            Ok(report) => {
                self.imports.mark(path);

                let mut feedback: Vec<Feedback> = report
                    .malformed
                    .iter()
                    .map(|line| Feedback::warning(format!("Skipping malformed line: {}", line.line)))
                    .collect();
                feedback.push(Feedback::success(format!(
                    "Imported {} song(s) from {}",
                    report.appended,
                    path.display()
                )));
                feedback
            }
            Err(e) => vec![Feedback::error(format!("{:#}", e))],
        }
    }

    fn export(&self, path: &Path) -> Vec<Feedback> {
        match import::export_file(&self.playlist, path) {
            Ok(()) => vec![Feedback::success(format!(
                "Exported {} song(s) to {}",
                self.playlist.len(),
                path.display()
            ))],
            Err(e) => vec![Feedback::error(format!("{:#}", e))],
        }
    }

    fn reset(&mut self) -> Vec<Feedback> {
        log::info!("Resetting playlist");

        self.playlist.reset();
        self.imports.clear();
        vec![Feedback::success("Playlist has been reset.")]
    }
}
