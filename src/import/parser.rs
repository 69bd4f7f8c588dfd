//! Line parser for `title,artist` song lists

use crate::model::Song;
use thiserror::Error;

/// A non-blank line that did not split into a title and an artist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Skipping malformed line {line_number}: {line}")]
pub struct MalformedImportLine {
    /// Line number in the source (1-based)
    pub line_number: usize,

    /// The offending line, trimmed
    pub line: String,
}

/// Parse a single line
///
/// Returns `Ok(None)` for blank lines. A line is accepted only when it has
/// exactly one comma and both sides are non-empty after trimming.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<Song>, MalformedImportLine> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let malformed = || MalformedImportLine {
        line_number,
        line: line.to_string(),
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    match fields.as_slice() {
        [title, artist] if !title.is_empty() && !artist.is_empty() => {
            Ok(Some(Song::new(*title, *artist)))
        }
        _ => Err(malformed()),
    }
}

/// Parse newline-delimited text into songs, in order, skipping blank lines
pub fn parse_lines(text: &str) -> impl Iterator<Item = Result<Song, MalformedImportLine>> + '_ {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| parse_line(i + 1, line).transpose())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_artist() {
        let song = parse_line(1, "  Karma Police ,  Radiohead  ").unwrap().unwrap();
        assert_eq!(song.title, "Karma Police");
        assert_eq!(song.artist, "Radiohead");
        assert!(song.audio.is_none());
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        assert_eq!(parse_line(1, ""), Ok(None));
        assert_eq!(parse_line(2, "   \t"), Ok(None));
    }

    #[test]
    fn test_wrong_field_count_is_malformed() {
        let err = parse_line(3, "Only a title").unwrap_err();
        assert_eq!(err.line_number, 3);
        assert_eq!(err.line, "Only a title");

        assert!(parse_line(4, "One,Two,Three").is_err());
    }

    #[test]
    fn test_empty_field_is_malformed() {
        assert!(parse_line(1, "Title,").is_err());
        assert!(parse_line(1, " , Artist").is_err());
        assert!(parse_line(1, ",").is_err());
    }

    #[test]
    fn test_parse_lines_keeps_order_and_line_numbers() {
        let text = "A,X\n\nbroken\nB,Y\r\n";
        let results: Vec<_> = parse_lines(text).collect();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().title, "A");
        assert_eq!(results[1].as_ref().unwrap_err().line_number, 3);
        assert_eq!(results[2].as_ref().unwrap().artist, "Y");
    }
}
