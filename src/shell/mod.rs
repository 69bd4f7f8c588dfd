//! Line-oriented command shell
//!
//! The shell is the presentation side of the playlist: it parses commands,
//! runs them against a [`Session`] and prints the resulting [`Feedback`].

mod command;
mod config;
mod session;

pub use command::{expand_path, Command, CommandError, USAGE};
pub use config::SessionConfig;
pub use session::{Feedback, Level, Session};

use crate::audio::AudioRenderer;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Read commands from `input` until end of input or `quit`
///
/// When `prompt` is set, a prompt is written before each command is read.
pub fn run<R, I, O>(session: &mut Session<R>, input: I, output: &mut O, prompt: bool) -> Result<()>
where
    R: AudioRenderer,
    I: BufRead,
    O: Write,
{
    write_feedback(output, &session.startup())?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(output, "playlist> ").context("Failed to write prompt")?;
            output.flush().context("Failed to flush output")?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read command")?;

        match Command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => write_feedback(output, &session.execute(command))?,
            Ok(None) => {}
            Err(e) => write_feedback(output, &[Feedback::error(e.to_string())])?,
        }
    }

    log::debug!("Shell finished with {} songs", session.playlist().len());
    Ok(())
}

fn write_feedback<O: Write>(output: &mut O, feedback: &[Feedback]) -> Result<()> {
    for item in feedback {
        writeln!(output, "{}", item).context("Failed to write output")?;
    }
    Ok(())
}
