use std::process::ExitCode;

use anyhow::Result;

use self::exit_code::exit_status_from_result;

mod args;
pub mod commands;
mod exit_code;
pub mod report;
mod run;

pub use args::*;
pub use exit_code::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(exit_status_from_result(&result).into())
}
