//! Open aliased files in aliased editors.
//!
//! The config file names tools (editor commands), paths (directory
//! aliases) and files (paths, optionally bound to a tool). [`edit::edit`]
//! resolves the command-line arguments against it, prompting when something
//! is missing, and runs the editor.

pub mod config;
pub mod edit;
pub mod opener;
pub mod ordered_map;
pub mod prompt;
pub mod resolve;

pub use config::Configuration;
pub use edit::{edit, Outcome, Request};
pub use ordered_map::OrderedMap;
