use music_playlist::audio::LogRenderer;
use music_playlist::shell;
use music_playlist::{Session, SessionConfig};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn run_script(config: SessionConfig, script: &str) -> (Session<LogRenderer>, String) {
    let mut session = Session::new(config, LogRenderer::new());
    let mut output = Vec::new();
    shell::run(&mut session, Cursor::new(script), &mut output, false).unwrap();
    (session, String::from_utf8(output).unwrap())
}

#[test]
fn test_script_builds_playlist() {
    let script = "add A, X\nadd B, Y\nadd C, Z\nnext\nremove B\nlist\nlength\n";
    let (session, output) = run_script(SessionConfig::new().with_marker("*"), script);

    assert_eq!(session.playlist().len(), 2);
    assert!(output.contains("Added: A by X"));
    assert!(output.contains("Deleted: B"));
    assert!(output.contains("* 2. C - Z"));
    assert!(output.contains("  1. A - X"));
    assert!(output.contains("Total songs in playlist: 2 song(s)"));
}

#[test]
fn test_quit_stops_reading() {
    let (session, _) = run_script(SessionConfig::new(), "add A, X\nquit\nadd B, Y\n");
    assert_eq!(session.playlist().len(), 1);
}

#[test]
fn test_unknown_command_is_reported() {
    let (_, output) = run_script(SessionConfig::new(), "dance\n");
    assert!(output.contains("Unknown command 'dance'"));
}

#[test]
fn test_import_is_guarded_until_reset() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("songs.txt");
    fs::write(&path, "A,X\nB,Y\n").unwrap();

    let script = format!(
        "import {0}\nimport {0}\nlength\nreset\nimport {0}\nlength\n",
        path.display()
    );
    let (session, output) = run_script(SessionConfig::new(), &script);

    assert!(output.contains("Already imported"));
    assert!(output.contains("Total songs in playlist: 2 song(s)"));
    assert!(output.contains("Playlist has been reset."));
    assert_eq!(session.playlist().len(), 2);
}

#[test]
fn test_startup_imports() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("songs.txt");
    fs::write(&path, "A,X\nbroken line\n").unwrap();

    let config = SessionConfig::new().with_imports(vec![path]);
    let (session, output) = run_script(config, "");

    assert_eq!(session.playlist().len(), 1);
    assert!(output.contains("Skipping malformed line: broken line"));
    assert!(output.contains("Imported 1 song(s)"));
}

#[test]
fn test_export_writes_song_list() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("export.txt");

    let script = format!("add A, X, /music/a.mp3\nadd B, Y\nexport {}\n", path.display());
    let (_, output) = run_script(SessionConfig::new(), &script);

    assert!(output.contains("Exported 2 song(s)"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "A,X\nB,Y\n");
}
