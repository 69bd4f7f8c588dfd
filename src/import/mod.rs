//! Bulk import of song lists
//!
//! Song lists are newline-delimited `title,artist` text. Well-formed lines
//! are appended to the playlist in file order; malformed lines are reported
//! and skipped, blank lines are ignored.

mod guard;
mod parser;

pub use guard::ImportGuard;
pub use parser::{parse_line, parse_lines, MalformedImportLine};

use crate::model::Playlist;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Outcome of importing one source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Number of songs appended
    pub appended: usize,

    /// Lines that were skipped
    pub malformed: Vec<MalformedImportLine>,
}

/// Append every well-formed line of `text` to the playlist
pub fn import_str(playlist: &mut Playlist, text: &str) -> ImportReport {
    let mut report = ImportReport::default();

    for result in parse_lines(text) {
        match result {
            Ok(song) => {
                playlist.append_song(song);
                report.appended += 1;
            }
            Err(malformed) => {
                log::warn!("{}", malformed);
                report.malformed.push(malformed);
            }
        }
    }

    report
}

/// Read a song list file and append it to the playlist
///
/// The file must be UTF-8.
pub fn import_file(playlist: &mut Playlist, path: &Path) -> Result<ImportReport> {
    log::info!("Importing song list from {:?}", path);

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read song list: {:?}", path))?;
    let report = import_str(playlist, &text);

    log::info!(
        "Imported {} songs ({} malformed lines skipped)",
        report.appended,
        report.malformed.len()
    );

    Ok(report)
}

/// A song that cannot be written as a `title,artist` line
///
/// Import would drop (or split differently) a line built from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot export song {position} ('{title}' by '{artist}'): title and artist must be non-empty and must not contain commas or line breaks")]
pub struct UnexportableSong {
    /// Position in the playlist (1-based)
    pub position: usize,

    pub title: String,
    pub artist: String,
}

fn is_exportable_field(field: &str) -> bool {
    !field.trim().is_empty() && !field.contains([',', '\n', '\r'])
}

/// Render the playlist as `title,artist` lines, the format [`import_str`] reads
///
/// Fails on the first song whose title or artist would not survive a
/// re-import. Audio handles are not part of the format and are dropped.
pub fn to_song_list(playlist: &Playlist) -> Result<String, UnexportableSong> {
    let mut text = String::new();

    for (i, song) in playlist.iter().enumerate() {
        if !is_exportable_field(&song.title) || !is_exportable_field(&song.artist) {
            return Err(UnexportableSong {
                position: i + 1,
                title: song.title.clone(),
                artist: song.artist.clone(),
            });
        }
        text.push_str(&format!("{},{}\n", song.title.trim(), song.artist.trim()));
    }

    Ok(text)
}

/// Write the playlist to a song list file
///
/// Nothing is written if any song cannot be exported. Audio handles are
/// lost: only titles and artists are saved.
pub fn export_file(playlist: &Playlist, path: &Path) -> Result<()> {
    log::info!("Exporting {} songs to {:?}", playlist.len(), path);

    let text = to_song_list(playlist)?;
    fs::write(path, text).with_context(|| format!("Failed to write song list: {:?}", path))?;

    Ok(())
}
