//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `resolve`: Resolve an options block and print the surviving parameters
//! - `check`: Resolve options files and report every dropped parameter
//! - `hash`: Decode the example and preferences of a share link
//! - `share`: Build a share link and its shortener request
//! - `examples`: List the loadable examples by category
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Hash(cmd)) => cmd.common.verbose,
            Some(Command::Share(cmd)) => cmd.common.verbose,
            Some(Command::Examples(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to search for the config file from
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Framework selection, as in the console's framework selector.
#[derive(Debug, Clone, Default, Args)]
pub struct FrameworkArgs {
    /// Framework label or URL, or `custom` (default: first configured framework)
    #[arg(long)]
    pub framework: Option<String>,

    /// Framework URL used with `--framework custom`
    #[arg(long)]
    pub framework_url: Option<String>,
}

/// Inputs shared by the commands that resolve options.
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Extension options appended after the user's options
    #[arg(long, value_name = "FILE")]
    pub extend: Option<PathBuf>,

    /// Code that onLoad callbacks must appear in
    #[arg(long, value_name = "FILE")]
    pub code: Option<PathBuf>,

    /// Keep onLoad callbacks that the code does not mention
    #[arg(long)]
    pub allow_bad_onload: bool,

    #[command(flatten)]
    pub framework: FrameworkArgs,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Options file to resolve (reads stdin when omitted or `-`)
    pub options: Option<PathBuf>,

    #[command(flatten)]
    pub resolve: ResolveArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Options files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub resolve: ResolveArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct HashCommand {
    /// Location hash or full share link
    pub hash: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ShareCommand {
    /// File whose code is embedded in the link
    #[arg(long, value_name = "FILE", conflicts_with = "example")]
    pub code: Option<PathBuf>,

    /// Example reference to link to instead of embedding code
    #[arg(long, value_name = "REF")]
    pub example: Option<String>,

    /// Options file saved in the link
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// API key saved in the link (custom framework only)
    #[arg(long)]
    pub api_key: Option<String>,

    #[command(flatten)]
    pub framework: FrameworkArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExamplesCommand {
    /// Examples directory (overrides config file)
    #[arg(long)]
    pub root: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve an options block and print the surviving parameters
    Resolve(ResolveCommand),
    /// Report duplicate, enforced and unused onLoad parameters in options files
    Check(CheckCommand),
    /// Decode the example and preferences carried by a share link
    Hash(HashCommand),
    /// Build a share link for code and options
    Share(ShareCommand),
    /// List loadable examples by category
    Examples(ExamplesCommand),
    /// Initialize a new .apiconsolerc.json configuration file
    Init,
}
