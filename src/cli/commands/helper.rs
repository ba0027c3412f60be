use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Ok, Result, bail};
use colored::Colorize;

use super::super::args::{CommonArgs, FrameworkArgs, ResolveArgs};
use super::{CommandResult, CommandSummary, FileDiagnostic};
use crate::config::{CUSTOM_FRAMEWORK, Config, load_config};
use crate::issues::{Diagnostic, Report, Severity};
use crate::options::{ParameterOrigin, Resolution, ResolutionContext, resolve};

/// Display name for options read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<FileDiagnostic>,
    files_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort_by(|a, b| {
        a.path
            .cmp(&b.path)
            .then_with(|| a.diagnostic.context().line.cmp(&b.diagnostic.context().line))
            .then_with(|| a.extended.cmp(&b.extended))
    });

    let mut error_count = issues
        .iter()
        .filter(|i| i.diagnostic.severity() == Severity::Error)
        .count();
    let mut warning_count = issues.len() - error_count;

    match &summary {
        CommandSummary::Init(summary) if summary.error.is_some() => error_count += 1,
        CommandSummary::Hash(summary) if summary.error.is_some() => error_count += 1,
        CommandSummary::Share(summary) if summary.shortener.is_err() => warning_count += 1,
        _ => {}
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        files_checked,
    }
}

pub fn load_command_config(common: &CommonArgs) -> Result<Config> {
    let loaded = load_config(&common.path)?;
    if common.verbose {
        if loaded.from_file {
            eprintln!("{} using configuration file", "note:".bold());
        } else {
            eprintln!("{} no configuration file found, using defaults", "note:".bold());
        }
    }
    Ok(loaded.config)
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Read `path`, or standard input when it is absent or `-`.
///
/// Returns the display name alongside the content.
pub fn read_source(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(path) if path != Path::new("-") => {
            Ok((path.display().to_string(), read_file(path)?))
        }
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read options from stdin")?;
            Ok((STDIN_NAME.to_string(), content))
        }
    }
}

/// The framework selector's value and the custom URL field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkChoice {
    /// A framework URL, or `custom`.
    pub value: String,
    pub custom_url: String,
}

impl FrameworkChoice {
    pub fn is_custom(&self) -> bool {
        self.value == CUSTOM_FRAMEWORK
    }
}

pub fn select_framework(config: &Config, args: &FrameworkArgs) -> Result<FrameworkChoice> {
    let custom_url = args.framework_url.clone().unwrap_or_default();

    let value = match args.framework.as_deref() {
        None => config.default_framework_url().to_string(),
        Some(name) if name.eq_ignore_ascii_case(CUSTOM_FRAMEWORK) => CUSTOM_FRAMEWORK.to_string(),
        Some(name) => match config.find_framework(name) {
            Some(framework) => framework.url.clone(),
            None => {
                let known: Vec<&str> = config.frameworks.iter().map(|f| f.label.as_str()).collect();
                bail!(
                    "Unknown framework '{}' (expected one of: {}, {})",
                    name,
                    known.join(", "),
                    CUSTOM_FRAMEWORK
                );
            }
        },
    };

    Ok(FrameworkChoice { value, custom_url })
}

pub fn resolution_context(config: &Config, choice: &FrameworkChoice, code: &str) -> ResolutionContext {
    ResolutionContext::new(code)
        .with_custom_framework(choice.is_custom())
        .with_enforced_defaults(config.enforced_defaults.clone())
}

/// Everything needed to resolve options blocks the same way.
pub struct ResolveInputs {
    pub ctx: ResolutionContext,
    /// Display name and content of the extension options.
    pub extension: Option<(String, String)>,
    pub strict_on_load: bool,
    pub verbose: bool,
}

impl ResolveInputs {
    /// The onLoad check only runs when there is code to check against.
    pub fn load(config: &Config, args: &ResolveArgs, verbose: bool) -> Result<Self> {
        let choice = select_framework(config, &args.framework)?;
        let code = args.code.as_deref().map(read_file).transpose()?;
        let extension = match args.extend.as_deref() {
            Some(path) => Some((path.display().to_string(), read_file(path)?)),
            None => None,
        };

        Ok(Self {
            ctx: resolution_context(config, &choice, code.as_deref().unwrap_or_default()),
            extension,
            strict_on_load: code.is_some() && !args.allow_bad_onload,
            verbose,
        })
    }

    pub fn resolve(&self, options: &str) -> Resolution {
        let extension = self.extension.as_ref().map(|(_, content)| content.as_str());
        let resolution = resolve(options, extension, &self.ctx, self.strict_on_load);
        if self.verbose {
            log_drops(&resolution.diagnostics);
        }
        resolution
    }

    /// Attach the file each diagnostic's line was read from.
    pub fn file_diagnostics(&self, options_name: &str, diagnostics: Vec<Diagnostic>) -> Vec<FileDiagnostic> {
        diagnostics
            .into_iter()
            .map(|diagnostic| {
                let (path, extended) = match (diagnostic.context().origin, &self.extension) {
                    (ParameterOrigin::Extension, Some((name, _))) => {
                        (name.clone(), Some(options_name.to_string()))
                    }
                    _ => (options_name.to_string(), None),
                };
                FileDiagnostic {
                    path,
                    diagnostic,
                    extended,
                }
            })
            .collect()
    }
}

pub fn log_drops(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!(
            "{} dropping parameter: ({}: {})",
            "note:".bold(),
            diagnostic.key(),
            diagnostic.value()
        );
    }
}
