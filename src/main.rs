use std::{io, process::ExitCode};

use array_rank::driver;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so stdout only holds the ranks
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let status =
        driver::main_with(std::env::args_os(), io::stdin().lock(), &mut io::stdout().lock(), &mut io::stderr());
    ExitCode::from(status)
}
