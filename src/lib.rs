//! apiconsole - option merge resolver for an API console page
//!
//! The console lets a user run API example code against a framework with
//! newline-separated `key: value` options. This crate resolves those options
//! (duplicates, enforced defaults, unused onLoad callbacks), models the page
//! workflow around it, and ships a CLI for resolving and checking options
//! files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `console`: Page workflow (preferences, share links, examples, notices)
//! - `issues`: Diagnostic definitions and reporting trait
//! - `options`: The option merge resolver
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod console;
pub mod issues;
pub mod options;
pub mod utils;
