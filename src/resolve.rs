//! Turning the `FILE` and `TOOL` arguments into a path and a command.

use std::hash::Hash;

use crate::config::{Configuration, FileEntry, ToolEntry};
use crate::ordered_map::OrderedMap;
use crate::prompt::{self, Console, MenuChoice};

#[cfg(test)]
mod tests;

/// Argument value that asks for a menu instead of naming an entry.
pub const ASK: &str = "ask";

/// Command used when no tools are configured and the prompt is left empty
/// and `$EDITOR` is unset.
pub const FALLBACK_EDITOR: &str = "vi";

/// `$EDITOR`, or [`FALLBACK_EDITOR`].
pub fn default_editor() -> String {
    std::env::var("EDITOR")
        .ok()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// The file to open, plus the command bound to it through `with`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    /// Path handed to the editor. Empty means the user cancelled.
    pub path: String,
    /// Command bound to the chosen file entry, if any.
    pub command: Option<String>,
}

/// A concrete path and the command to open it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Path handed to the editor.
    pub path: String,
    /// Editor command line, without the path.
    pub command: String,
}

/// Turns command-line arguments into a [`Resolution`], prompting on
/// `console` when an argument is missing or asks for a menu.
#[derive(Debug)]
pub struct Resolver<'a, C: Console + ?Sized> {
    config: &'a Configuration,
    console: &'a mut C,
    default_editor: String,
}

impl<'a, C: Console + ?Sized> Resolver<'a, C> {
    /// `default_editor` is offered when there are no tools to choose from.
    pub fn new(config: &'a Configuration, console: &'a mut C, default_editor: impl Into<String>) -> Self {
        Self {
            config,
            console,
            default_editor: default_editor.into(),
        }
    }

    /// Resolve both the path and the command. `None` when the user left a
    /// required answer empty.
    pub fn resolve(&mut self, file_arg: &str, tool_arg: &str) -> Option<Resolution> {
        let target = self.resolve_file(file_arg);
        if target.path.is_empty() {
            log::debug!("no path resolved");
            return None;
        }

        let command = match target.command {
            Some(bound) if tool_arg.is_empty() => bound,
            _ => self.resolve_tool(tool_arg),
        };
        if command.is_empty() {
            log::debug!("no command resolved");
            return None;
        }

        Some(Resolution {
            path: target.path,
            command,
        })
    }

    /// Step one: pick the path, and the command bound to it if any.
    pub fn resolve_file(&mut self, file_arg: &str) -> FileTarget {
        let config = self.config;
        let files = &config.files;

        if files.is_empty() {
            let path = if file_arg.is_empty() {
                prompt::ask_text(&mut *self.console, "Type a file path", None)
            } else {
                file_arg.to_string()
            };
            return FileTarget {
                path,
                command: None,
            };
        }

        if file_arg.is_empty() || file_arg == ASK {
            let labels: Vec<String> = files
                .values()
                .map(|f| prompt::option_label(&f.name, &f.path))
                .collect();
            return match prompt::choose(&mut *self.console, "Choose a file or type a path", &labels) {
                MenuChoice::Index(i) => entry_at(files, i).map_or_else(
                    || FileTarget {
                        path: String::new(),
                        command: None,
                    },
                    file_target,
                ),
                MenuChoice::Typed(path) => FileTarget {
                    path,
                    command: None,
                },
            };
        }

        match files.get(&file_arg.to_string()) {
            Ok(entry) => file_target(entry),
            Err(_) => {
                log::debug!("{file_arg:?} is not a file alias, using it as a path");
                FileTarget {
                    path: file_arg.to_string(),
                    command: None,
                }
            }
        }
    }

    /// Step two: pick the command. Empty means the user cancelled.
    pub fn resolve_tool(&mut self, tool_arg: &str) -> String {
        let config = self.config;
        let tools = &config.tools;

        if tools.is_empty() {
            return if tool_arg.is_empty() {
                prompt::ask_text(&mut *self.console, "Type a command", Some(self.default_editor.as_str()))
            } else {
                tool_arg.to_string()
            };
        }

        if tool_arg.is_empty() {
            return entry_at(tools, 0).map(|t| t.command.clone()).unwrap_or_default();
        }

        if tool_arg == ASK {
            let labels: Vec<String> = tools
                .values()
                .map(|t| prompt::option_label(&t.name, &t.command))
                .collect();
            return match prompt::choose(&mut *self.console, "Choose a tool or type a command", &labels) {
                MenuChoice::Index(i) => entry_at(tools, i).map(|t| t.command.clone()).unwrap_or_default(),
                MenuChoice::Typed(command) => command,
            };
        }

        tools
            .get(&tool_arg.to_string())
            .map_or_else(|_| tool_arg.to_string(), |t: &ToolEntry| t.command.clone())
    }
}

fn file_target(entry: &FileEntry) -> FileTarget {
    FileTarget {
        path: entry.path.clone(),
        command: entry.tool.clone(),
    }
}

fn entry_at<K: Eq + Hash + Clone, V>(map: &OrderedMap<K, V>, index: usize) -> Option<&V> {
    let key = map.key_at(isize::try_from(index).ok()?).ok()?;
    map.get(key).ok()
}
