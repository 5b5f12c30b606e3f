// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Command-line interface for the target-matrix binary.
//!
//! The binary is a filter: it reads a comma-separated target list from
//! standard input and prints the build matrix as a single JSON line.

use std::{
    ffi::OsString,
    io::{self, Read, Write},
    process
};

use clap::Parser;
use target_matrix::{Error, read_matrix, write_matrix};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Translate comma-separated build targets into a signing matrix.
///
/// Targets ending in `+` are signed only, targets ending in `*` are built
/// both signed and unsigned, and unmarked targets are unsigned only.
///
/// The binary is a pure filter: help and version flags are disabled and any
/// argument is accepted and ignored, so standard output only ever carries
/// the matrix.
#[derive(Debug, Parser)]
#[command(
    name = "target-matrix",
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Arguments passed by callers; none of them affect classification.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _ignored: Vec<OsString>
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main() {
    let _cli = Cli::parse();
    init_logging();

    if let Err(error) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1);
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Classifies standard input and writes the matrix to standard output.
///
/// # Errors
///
/// Propagates failures reading standard input or writing standard output.
fn run() -> Result<(), Error> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    run_with(stdin.lock(), stdout.lock())
}

fn run_with<R: Read, W: Write>(reader: R, writer: W) -> Result<(), Error> {
    let matrix = read_matrix(reader)?;
    write_matrix(writer, &matrix)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;

    use super::{Cli, run_with};

    fn filter(input: &str) -> String {
        let mut output = Vec::new();
        run_with(Cursor::new(input), &mut output).expect("failed to run filter");
        String::from_utf8(output).expect("invalid UTF-8")
    }

    #[test]
    fn cli_accepts_bare_invocation() {
        Cli::try_parse_from([env!("CARGO_PKG_NAME")]).expect("failed to parse CLI");
    }

    #[test]
    fn cli_ignores_positional_arguments() {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "linux", "macos+"])
            .expect("failed to parse CLI");
        assert_eq!(cli._ignored.len(), 2);
    }

    #[test]
    fn cli_ignores_help_and_version_flags() {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "--help", "--version", "-V"])
            .expect("help and version must not abort the filter");
        assert_eq!(cli._ignored.len(), 3);
    }

    #[test]
    fn cli_ignores_unknown_flags() {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "--pretty", "-x", "value"])
            .expect("unknown flags must not abort the filter");
        assert_eq!(cli._ignored.len(), 3);
    }

    #[test]
    fn filter_translates_workflow_input() {
        assert_eq!(
            filter("linux, macos+, windows*\n"),
            "{\"include\":[{\"target\":\"linux\",\"sign\":false,\"unsigned\":true},\
             {\"target\":\"macos\",\"sign\":true,\"unsigned\":false},\
             {\"target\":\"windows\",\"sign\":true,\"unsigned\":true}]}\n"
        );
    }

    #[test]
    fn filter_handles_empty_stdin() {
        assert_eq!(
            filter(""),
            "{\"include\":[{\"target\":\"\",\"sign\":false,\"unsigned\":true}]}\n"
        );
    }

    #[test]
    fn filter_rejects_non_utf8_input() {
        let mut output = Vec::new();
        let error = run_with(Cursor::new(vec![0xc3, 0x28]), &mut output)
            .expect_err("expected read error");

        assert!(matches!(error, target_matrix::Error::Read { .. }));
        assert!(output.is_empty());
    }
}
