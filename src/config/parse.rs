use crate::ordered_map::OrderedMap;

use super::vars::substitute;
use super::{Configuration, FileEntry, PathAlias, ToolEntry};

/// Separates a file's path from the tool bound to it.
const WITH: &str = " with ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Tools,
    Paths,
    Files,
}

impl Section {
    fn from_header(name: &str) -> Option<Self> {
        match name {
            "TOOLS" => Some(Self::Tools),
            "PATHS" => Some(Self::Paths),
            "FILES" => Some(Self::Files),
            _ => None,
        }
    }
}

/// Raw lines grouped by section, in file order.
#[derive(Debug, Default)]
struct Sections<'a> {
    tools: Vec<&'a str>,
    paths: Vec<&'a str>,
    files: Vec<&'a str>,
}

impl<'a> Sections<'a> {
    fn push(&mut self, section: Section, line: &'a str) {
        match section {
            Section::Tools => self.tools.push(line),
            Section::Paths => self.paths.push(line),
            Section::Files => self.files.push(line),
        }
    }
}

pub(super) fn parse(text: &str) -> Configuration {
    let sections = split_sections(text);

    let tools = parse_tools(&sections.tools);
    let paths = parse_paths(&sections.paths);
    let files = parse_files(&sections.files, &paths, &tools);

    log::debug!(
        "parsed config: {} tools, {} paths, {} files",
        tools.len(),
        paths.len(),
        files.len()
    );
    Configuration {
        tools,
        paths,
        files,
    }
}

fn split_sections(text: &str) -> Sections<'_> {
    let mut sections = Sections::default();
    let mut current = None;

    for line in text.lines().map(clean_line).filter(|l| !l.is_empty()) {
        if let Some(name) = header_name(line) {
            current = Section::from_header(name);
            if current.is_none() {
                log::debug!("ignoring unknown section [{name}]");
            }
        } else if let Some(section) = current {
            sections.push(section, line);
        } else {
            log::trace!("dropping line outside any section: {line:?}");
        }
    }
    sections
}

/// Drop a trailing `#` comment and surrounding spaces/tabs.
fn clean_line(line: &str) -> &str {
    let code = line.split_once('#').map_or(line, |(code, _)| code);
    code.trim_matches([' ', '\t', '\r'])
}

/// Text between the first `[` and the next `]`, if the line has both.
fn header_name(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once('[')?;
    let (name, _) = rest.split_once(']')?;
    Some(name)
}

/// Split on the first `=`. A line without one has an empty value.
fn split_entry(line: &str) -> (&str, &str) {
    line.split_once('=').unwrap_or((line, ""))
}

fn parse_tools(lines: &[&str]) -> OrderedMap<String, ToolEntry> {
    lines
        .iter()
        .map(|line| {
            let (name, command) = split_entry(line);
            let command = if command.is_empty() { name } else { command };
            (
                name.to_string(),
                ToolEntry {
                    name: name.to_string(),
                    command: command.to_string(),
                },
            )
        })
        .collect()
}

fn parse_paths(lines: &[&str]) -> OrderedMap<String, PathAlias> {
    lines
        .iter()
        .map(|line| split_entry(line))
        .filter(|(name, path)| {
            if path.is_empty() {
                log::debug!("skipping path alias {name:?} without a value");
            }
            !path.is_empty()
        })
        .map(|(name, path)| {
            (
                name.to_string(),
                PathAlias {
                    name: name.to_string(),
                    path: path.to_string(),
                },
            )
        })
        .collect()
}

// Built one line at a time: a file may reference files declared above it.
fn parse_files(
    lines: &[&str],
    paths: &OrderedMap<String, PathAlias>,
    tools: &OrderedMap<String, ToolEntry>,
) -> OrderedMap<String, FileEntry> {
    let mut files = OrderedMap::new();
    for line in lines {
        let (name, target) = split_entry(line);
        let target = if target.is_empty() { name } else { target };
        let (path, tool) = target.split_once(WITH).unwrap_or((target, ""));

        let path = if path.contains('$') {
            let path = substitute(path, paths);
            substitute(&path, &files)
        } else {
            path.to_string()
        };

        let entry = FileEntry {
            name: name.to_string(),
            path,
            tool: bound_tool(tool, tools),
        };
        files.set(name.to_string(), entry);
    }
    files
}

/// A `$` tool part is substituted and kept as a raw command; anything else
/// is looked up as a tool name first.
fn bound_tool(tool: &str, tools: &OrderedMap<String, ToolEntry>) -> Option<String> {
    if tool.is_empty() {
        return None;
    }
    if tool.contains('$') {
        return Some(substitute(tool, tools));
    }
    let command = tools
        .get(&tool.to_string())
        .map_or(tool, |entry| entry.command.as_str());
    Some(command.to_string())
}
