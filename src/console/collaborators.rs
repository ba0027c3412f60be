//! Interfaces to the pieces of the page the console drives but does not own.

use std::fmt;

use anyhow::Result;
use serde_json::Value;

/// The code editor widget.
pub trait CodeEditor {
    fn get_code(&self) -> String;
    fn set_code(&mut self, code: &str);
}

/// Options for a cookie write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    pub path: String,
    pub expires_days: u32,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            expires_days: 365,
        }
    }
}

pub trait CookieStore {
    fn read(&self, name: &str) -> Option<String>;
    fn write(&mut self, name: &str, value: &str, options: &CookieOptions);
}

/// A failed fetch of a plain-text resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub status: u16,
    pub status_text: String,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status: {} {}", self.status, self.status_text)
    }
}

impl std::error::Error for FetchFailure {}

pub trait HttpClient {
    /// Fetch and decode a JSON document.
    fn get_json(&self, url: &str) -> Result<Value>;

    /// Fetch a text document such as an example file.
    fn get_text(&self, url: &str) -> std::result::Result<String, FetchFailure>;
}

/// The sandboxed frame user code runs in.
pub trait Sandbox {
    /// Remove any previously generated frame.
    fn clear(&mut self);

    /// Create a fresh frame.
    fn load(&mut self) -> Result<()>;

    /// Run `code` against the framework at `framework_url`.
    fn run(&mut self, code: &str, framework_url: &str, params: &str) -> Result<()>;
}
