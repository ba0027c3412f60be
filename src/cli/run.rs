//! Dispatch of parsed arguments to the command handlers.

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{
        check::check, examples::examples, hash::hash, init::init, resolve::resolve, share::share,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Hash(cmd)) => hash(cmd),
        Some(Command::Share(cmd)) => share(cmd),
        Some(Command::Examples(cmd)) => examples(cmd),
        Some(Command::Init) => init(),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
