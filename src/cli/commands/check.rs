use anyhow::{Ok, Result};
use rayon::prelude::*;

use super::super::args::CheckCommand;
use super::{
    CommandResult, CommandSummary,
    helper::{ResolveInputs, finish, load_command_config, read_file},
};

/// Resolve every options file with the same code, extension and framework.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let config = load_command_config(&cmd.common)?;
    let inputs = ResolveInputs::load(&config, &cmd.resolve, cmd.common.verbose)?;

    let per_file = cmd
        .files
        .par_iter()
        .map(|path| {
            let options = read_file(path)?;
            let resolution = inputs.resolve(&options);
            Ok(inputs.file_diagnostics(&path.display().to_string(), resolution.diagnostics))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(finish(
        CommandSummary::Check,
        per_file.into_iter().flatten().collect(),
        cmd.files.len(),
        true,
    ))
}
