use anyhow::{Ok, Result};

use super::super::args::ShareCommand;
use super::{
    CommandResult, CommandSummary, FileDiagnostic, ShareSummary,
    helper::{
        finish, load_command_config, log_drops, read_file, resolution_context, select_framework,
    },
};
use crate::console::{
    Location, Preferences,
    location::{build_hash, inline_code_example},
    shortener::request_url,
};
use crate::options::resolve;

const OPTIONS_NAME: &str = "<options>";

/// Build the link the console would put in the location after a run.
///
/// Options are resolved leniently, as for a run; embedded code takes
/// precedence over an example reference.
pub fn share(cmd: ShareCommand) -> Result<CommandResult> {
    let config = load_command_config(&cmd.common)?;
    let choice = select_framework(&config, &cmd.framework)?;

    let code = cmd.code.as_deref().map(read_file).transpose()?;
    let options = cmd.options.as_deref().map(read_file).transpose()?;
    let options_name = cmd
        .options
        .as_ref()
        .map_or(OPTIONS_NAME.to_string(), |p| p.display().to_string());

    let ctx = resolution_context(&config, &choice, code.as_deref().unwrap_or_default());
    let resolution = resolve(options.as_deref().unwrap_or_default(), None, &ctx, false);
    if cmd.common.verbose {
        log_drops(&resolution.diagnostics);
    }

    let example = match (&code, &cmd.example) {
        (Some(code), _) => inline_code_example(code),
        (None, Some(reference)) => reference.clone(),
        (None, None) => String::new(),
    };
    let preferences = Preferences {
        framework: Some(choice.value),
        frameworkurl: Some(choice.custom_url),
        apikey: Some(cmd.api_key.unwrap_or_default()),
        apioptions: Some(resolution.text),
        extendapioptions: None,
    };

    let mut location = Location::parse(&config.console_url);
    location.set_hash(&build_hash(&example, &preferences)?);
    let href = location.href();
    let shortener = request_url(&config.shortener, &href);

    let issues = resolution
        .diagnostics
        .into_iter()
        .map(|diagnostic| FileDiagnostic {
            path: options_name.clone(),
            diagnostic,
            extended: None,
        })
        .collect();

    Ok(finish(
        CommandSummary::Share(ShareSummary { href, shortener }),
        issues,
        1,
        false,
    ))
}
