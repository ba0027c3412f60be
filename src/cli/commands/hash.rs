use anyhow::Result;
use colored::Colorize;

use super::super::args::HashCommand;
use super::{CommandResult, CommandSummary, HashSummary, helper::finish};
use crate::console::{
    ExampleSource, Location,
    location::{example_from_hash, preferences_from_hash},
};

/// Decode a location hash, or the hash part of a full share link.
pub fn hash(cmd: HashCommand) -> Result<CommandResult> {
    let hash = if cmd.hash.contains('#') {
        Location::parse(&cmd.hash).hash
    } else {
        cmd.hash.clone()
    };

    let source = ExampleSource::classify(example_from_hash(&hash));
    let (preferences, error) = match preferences_from_hash(&hash) {
        None => (None, None),
        Some(Ok(preferences)) => (Some(preferences), None),
        Some(Err(e)) => {
            if cmd.common.verbose {
                eprintln!("{} {:#}", "note:".bold(), e);
            }
            (
                None,
                Some("the URL is malformed. Could not retrieve preferences.".to_string()),
            )
        }
    };

    Ok(finish(
        CommandSummary::Hash(HashSummary {
            source,
            preferences,
            error,
        }),
        Vec::new(),
        0,
        true,
    ))
}
