//! The `edd` configuration file.
//!
//! ```text
//! [TOOLS]
//! vim                 # bare name: the command is `vim`
//! code=code --wait
//!
//! [PATHS]
//! home=/home/u
//!
//! [FILES]
//! notes=$home/notes.txt with vim
//! ```
//!
//! `#` starts a comment, blank lines and unknown sections are ignored, `=`
//! splits on its first occurrence and ` with ` binds a file to a tool.

mod parse;
mod vars;


use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::ordered_map::OrderedMap;

/// One `[TOOLS]` line: `name=command`, or a bare `name` meaning `name=name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolEntry {
    /// Alias used on the command line and in `$name` references.
    pub name: String,
    /// Command line the file path is appended to.
    pub command: String,
}

/// One `[PATHS]` line. Only ever used as a `$name` substitution source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathAlias {
    /// Alias referenced as `$name` from `[FILES]`.
    pub name: String,
    /// Literal replacement text.
    pub path: String,
}

/// One `[FILES]` line: `name=path [with tool]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Alias used on the command line.
    pub name: String,
    /// Path after `$name` substitution.
    pub path: String,
    /// Command bound through `with`, already resolved against `[TOOLS]`.
    pub tool: Option<String>,
}

/// Everything read from the config file. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// `[TOOLS]` in declaration order; the first one is the default tool.
    pub tools: OrderedMap<String, ToolEntry>,
    /// `[PATHS]` in declaration order.
    pub paths: OrderedMap<String, PathAlias>,
    /// `[FILES]` in declaration order; the first one is the default file.
    pub files: OrderedMap<String, FileEntry>,
}

impl Configuration {
    /// Default location: `~/.config/edd`.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir();
        Self::locate(None, home).context("Could not determine home directory")
    }

    /// Where to read the configuration from: the `--conf` override when
    /// given, else `<home>/.config/edd`. `None` when neither is known.
    pub fn locate(conf: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
        conf.or_else(|| home.map(|home| home.join(".config").join("edd")))
    }

    /// [`locate`](Self::locate) then [`load`](Self::load). Without a location
    /// a warning is printed and the configuration is empty.
    pub fn load_from(conf: Option<PathBuf>, home: Option<PathBuf>) -> Self {
        let Some(path) = Self::locate(conf, home) else {
            eprintln!("Warning: Could not determine home directory, no configuration loaded");
            return Self::default();
        };
        log::debug!("reading configuration from {}", path.display());
        Self::load(&path)
    }

    /// Parse config text. Never fails: unknown sections and headerless lines
    /// are dropped, lines without `=` get their defaults.
    pub fn parse(text: &str) -> Self {
        parse::parse(text)
    }

    /// Read and parse the file at `path`. A missing or unreadable file is
    /// reported on stderr and yields an empty configuration.
    pub fn load(path: &Path) -> Self {
        match read(path) {
            Ok(text) => Self::parse(&text),
            Err(e) => {
                log::debug!("{e:#}");
                eprintln!("Configuration file {} doesn't exist.", path.display());
                Self::default()
            }
        }
    }

    /// `true` when no tools, paths or files are declared.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty() && self.paths.is_empty() && self.files.is_empty()
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))
}
