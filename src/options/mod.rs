//! Option merge resolution.
//!
//! Parameter blocks are newline-separated `key:value` lines. The resolver
//! merges the user's block with saved extension parameters, removes
//! duplicates and keys the framework owns, and reports every dropped line.
//!
//! ## Module Structure
//!
//! - `line`: Parsing of a single parameter line
//! - `context`: Explicit state the precedence rules depend on
//! - `resolver`: The precedence rules themselves

pub mod context;
pub mod line;
pub mod resolver;

pub use context::{DEFAULT_ENFORCED_DEFAULTS, ResolutionContext, default_enforced_defaults};
pub use line::{ParameterLine, ParameterOrigin};
pub use resolver::{ON_LOAD_KEY, Resolution, resolve};
