//! The console page workflow around option resolution.
//!
//! ## Module Structure
//!
//! - `collaborators`: Traits for the editor, cookies, HTTP and the sandbox
//! - `preferences`: Saved preferences and the options form
//! - `location`: Share links in the location hash
//! - `example`: Example references and remote example decoding
//! - `catalog`: Example listing from a directory tree
//! - `notice`: User-facing messages keyed by id
//! - `shortener`: Requests to the link shortener
//! - `session`: The page workflow tying everything together

pub mod catalog;
pub mod collaborators;
pub mod example;
pub mod location;
pub mod notice;
pub mod preferences;
pub mod session;
pub mod shortener;

pub use catalog::{ExampleEntry, ExampleGroup, scan_examples};
pub use collaborators::{CodeEditor, CookieOptions, CookieStore, FetchFailure, HttpClient, Sandbox};
pub use example::ExampleSource;
pub use location::Location;
pub use notice::{Notice, NoticeBoard, NoticeId};
pub use preferences::{OptionsForm, PREFERENCES_COOKIE, Preferences};
pub use session::{ConsoleSession, RunReport};
pub use shortener::UrlTooLong;
