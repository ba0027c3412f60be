use crate::console::{ExampleGroup, ExampleSource, Preferences, UrlTooLong};
use crate::issues::Diagnostic;

#[derive(Debug)]
pub enum CommandSummary {
    Resolve(ResolveSummary),
    Check,
    Hash(HashSummary),
    Share(ShareSummary),
    Examples(ExamplesSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ResolveSummary {
    /// The resolved options block.
    pub text: String,
}

#[derive(Debug)]
pub struct HashSummary {
    pub source: Option<ExampleSource>,
    pub preferences: Option<Preferences>,
    /// Set when the preferences part could not be decoded.
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct ShareSummary {
    pub href: String,
    /// The shortener request, or why none can be sent.
    pub shortener: Result<String, UrlTooLong>,
}

#[derive(Debug)]
pub struct ExamplesSummary {
    pub root: String,
    pub groups: Vec<ExampleGroup>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// A dropped parameter together with the file it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiagnostic {
    pub path: String,
    pub diagnostic: Diagnostic,
    /// Options file being resolved when `path` is the extension file.
    pub extended: Option<String>,
}

/// Result of running apiconsole commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for commands whose output is the product).
    pub exit_on_errors: bool,
    /// Every dropped parameter, sorted by file and line.
    pub issues: Vec<FileDiagnostic>,
    /// Number of options blocks that were resolved.
    pub files_checked: usize,
}
