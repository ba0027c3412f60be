use std::path::{Path, PathBuf};

use anyhow::{Ok, Result};

use super::super::args::ExamplesCommand;
use super::{
    CommandResult, CommandSummary, ExamplesSummary,
    helper::{finish, load_command_config},
};
use crate::console::scan_examples;

pub fn examples(cmd: ExamplesCommand) -> Result<CommandResult> {
    let config = load_command_config(&cmd.common)?;

    let root = match cmd.root {
        Some(root) => root,
        None if cmd.common.path == Path::new(".") => PathBuf::from(&config.examples_root),
        None => cmd.common.path.join(&config.examples_root),
    }
    .to_string_lossy()
    .to_string();
    let groups = scan_examples(&root, &config.ignores, cmd.common.verbose)?;

    Ok(finish(
        CommandSummary::Examples(ExamplesSummary { root, groups }),
        Vec::new(),
        0,
        false,
    ))
}
