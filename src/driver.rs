//! Everything the `array-rank` binary does, with its standard streams passed
//! in so it can run inside tests.

use std::{
    ffi::OsString,
    io::{Read, Write},
};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use crate::{
    config::{Args, Config, Input},
    generators,
    values::{Ranks, Values},
};

/// Exit status for a failed run after the arguments were accepted. Rejected
/// arguments use clap's status instead.
pub const FAILURE: u8 = 1;

/// Parses `args` (including the program name), ranks the input and writes the
/// input line followed by the ranks line to `stdout`. Errors go to `stderr`.
/// Returns the exit status.
pub fn main_with<I, T, R, W, E>(args: I, stdin: R, stdout: &mut W, stderr: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: Read,
    W: Write,
    E: Write,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(e) => {
            // `--help` is reported as an error by clap but belongs on stdout
            let written = if e.use_stderr() {
                write!(stderr, "{}", e.render())
            } else {
                write!(stdout, "{}", e.render())
            };
            if let Err(io) = written {
                debug!(%io, "could not print usage");
            }
            return e.exit_code() as u8;
        }
    };

    let result = Config::from_cli(args)
        .map_err(anyhow::Error::from)
        .and_then(|config| run(&config, stdin, stdout));
    match result {
        Ok(()) => 0,
        Err(e) => {
            debug!("{:?}", e);
            if let Err(io) = writeln!(stderr, "error: {:#}", e) {
                debug!(%io, "could not print error");
            }
            FAILURE
        }
    }
}

/// Ranks the configured input and writes the input and the ranks, one line
/// each.
pub fn run<R: Read, W: Write>(config: &Config, stdin: R, stdout: &mut W) -> anyhow::Result<()> {
    let values = read_input(config, stdin)?;
    info!(len = values.len(), transform = ?config.transform, "ranking values");
    let ranks = values.ranks(&config.transform);
    writeln!(stdout, "{}", values).context("failed to write values")?;
    writeln!(stdout, "{}", Ranks(&ranks)).context("failed to write ranks")?;
    Ok(())
}

pub fn read_input<R: Read>(config: &Config, mut stdin: R) -> anyhow::Result<Values> {
    let values = match &config.input {
        Input::Literal(values) => values.clone(),
        Input::Stdin => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).context("failed to read values from stdin")?;
            buf.parse()?
        }
        &Input::Uniform { len, min, max } => {
            generators::uniform(&mut generators::seeded_rng(config.seed), len, min, max)?
        }
        &Input::Gaussian { len, mean, std_dev } => {
            generators::gaussian(&mut generators::seeded_rng(config.seed), len, mean, std_dev)?
        }
    };
    Ok(values)
}
