//! Fixture CLI printing random user records as JSON.
//!
//! This binary delegates to `user_fixtures::cli` for parsing, rule mapping,
//! generation and rendering, keeping the behaviour testable without spawning
//! a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use user_fixtures::cli::{CliError, Options, execute, parse_args, write_stdout};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let options = match parse_args(env::args_os()) {
        Ok(options) => options,
        Err(err) => err.exit(),
    };
    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> Result<(), CliError> {
    write_stdout(&execute(options)?)
}
