mod trace;

use linetrace::LineTraceResult;

use crate::cli::Cli;

/// The main function to run the command based on CLI input.
pub fn run(cli: Cli) -> LineTraceResult<()> {
    trace::run(&cli)
}
