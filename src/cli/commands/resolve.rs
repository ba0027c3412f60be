use anyhow::{Ok, Result};

use super::super::args::ResolveCommand;
use super::{
    CommandResult, CommandSummary, ResolveSummary,
    helper::{ResolveInputs, finish, load_command_config, read_source},
};
use crate::options::Resolution;

pub fn resolve(cmd: ResolveCommand) -> Result<CommandResult> {
    let config = load_command_config(&cmd.common)?;
    let inputs = ResolveInputs::load(&config, &cmd.resolve, cmd.common.verbose)?;
    let (name, options) = read_source(cmd.options.as_deref())?;

    let Resolution {
        text, diagnostics, ..
    } = inputs.resolve(&options);
    let issues = inputs.file_diagnostics(&name, diagnostics);

    Ok(finish(
        CommandSummary::Resolve(ResolveSummary { text }),
        issues,
        1,
        false,
    ))
}
