//! User-facing messages shown above the console.
//!
//! Each message has a stable id so that raising it again updates the
//! existing message instead of stacking a new one.

use std::fmt;

use colored::Colorize;

use crate::issues::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeId {
    /// An example could not be loaded.
    LoadFailed,
    /// The preferences cookie could not be read.
    BadCookie,
    /// The preferences in the link could not be read.
    MalformedUrl,
    /// The sandbox frame could not be created.
    InjectFailed,
    /// The code failed inside the sandbox.
    SandboxFailed,
    /// The link is too long to shorten.
    UrlTooLong,
    /// An onLoad parameter was removed.
    BadOnLoad,
}

impl NoticeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeId::LoadFailed => "error1000",
            NoticeId::BadCookie => "error1001",
            NoticeId::MalformedUrl => "error1002",
            NoticeId::InjectFailed => "error1003",
            NoticeId::SandboxFailed => "error1004",
            NoticeId::UrlTooLong => "error1005",
            NoticeId::BadOnLoad => "badonload",
        }
    }
}

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "Error: {}", self.message),
            Severity::Warning => write!(f, "Warning: {}", self.message),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    verbose: bool,
}

impl NoticeBoard {
    pub fn new(verbose: bool) -> Self {
        Self {
            notices: Vec::new(),
            verbose,
        }
    }

    /// Show `message` under `id`, replacing any message already shown there.
    pub fn throw(&mut self, id: NoticeId, message: impl Into<String>, severity: Severity) {
        let notice = Notice {
            id,
            severity,
            message: message.into(),
        };

        if self.verbose {
            let label = match severity {
                Severity::Error => "error:".bold().red(),
                Severity::Warning => "warning:".bold().yellow(),
            };
            eprintln!("{} [{}] {}", label, id, notice.message);
        }

        match self.notices.iter_mut().find(|n| n.id == id) {
            Some(existing) => *existing = notice,
            None => self.notices.push(notice),
        }
    }

    pub fn error(&mut self, id: NoticeId, message: impl Into<String>) {
        self.throw(id, message, Severity::Error);
    }

    pub fn warning(&mut self, id: NoticeId, message: impl Into<String>) {
        self.throw(id, message, Severity::Warning);
    }

    pub fn remove(&mut self, id: NoticeId) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }

    pub fn get(&self, id: NoticeId) -> Option<&Notice> {
        self.notices.iter().find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
