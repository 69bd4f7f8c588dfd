use anyhow::Result;
use clap::Parser;
use music_playlist::audio::LogRenderer;
use music_playlist::shell::{self, expand_path};
use music_playlist::{Session, SessionConfig};
use std::io::{self, IsTerminal};

#[derive(Parser, Debug)]
#[command(name = "music-playlist")]
#[command(about = "Manage a playlist from the command line", long_about = None)]
struct Args {
    /// Song list (one `title,artist` per line) to import at start-up
    /// (can be specified multiple times)
    #[arg(short = 'i', long = "import")]
    imports: Vec<String>,

    /// Don't play the current song after next/prev
    #[arg(long)]
    no_autoplay: bool,

    /// Marker shown in front of the current song in listings
    #[arg(long, default_value = "▶")]
    marker: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = SessionConfig::new()
        .with_autoplay(!args.no_autoplay)
        .with_marker(args.marker)
        .with_imports(args.imports.iter().map(|path| expand_path(path)).collect());

    if !config.startup_imports.is_empty() {
        log::info!("Importing {} song list(s)", config.startup_imports.len());
    }

    let mut session = Session::new(config, LogRenderer::new());

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();
    shell::run(&mut session, stdin.lock(), &mut stdout, interactive)?;

    log::info!(
        "Session ended with {} song(s) in the playlist",
        session.playlist().len()
    );

    Ok(())
}
