use std::error::Error as _;
use std::process::ExitCode;

use clap::CommandFactory;
use clap::error::ErrorKind;
use linetrace::LineTraceError;

use crate::cli::Cli;

/// Print a failed run and pick the exit status.
pub fn report_error(err: &LineTraceError) -> ExitCode {
    match err {
        LineTraceError::Decode { path, source } => {
            println!("Error: Unable to load image {}", path.display());
            eprintln!("{source}");
        }
        _ => {
            eprintln!("Error: {err}");
            let mut cause = err.source();
            while let Some(inner) = cause {
                eprintln!("  caused by: {inner}");
                cause = inner.source();
            }
        }
    }
    ExitCode::FAILURE
}

/// Handle an argument parsing failure. Help and version requests exit normally.
pub fn report_usage(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => {
            println!("{}", Cli::command().render_usage());
            eprint!("{err}");
            ExitCode::FAILURE
        }
    }
}
