//! One `edd` run: resolve, launch, report.

use std::process::ExitStatus;

use crate::config::Configuration;
use crate::opener::{self, LaunchError, Launcher};
use crate::prompt::Console;
use crate::resolve::Resolver;


/// What was asked for on the command line. Empty strings mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// File alias, literal path, `ask`, or empty.
    pub file: String,
    /// Tool alias, literal command, `ask`, or empty.
    pub tool: String,
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// A prompt was left empty; nothing was launched.
    Cancelled,
    /// The editor ran and exited.
    Edited {
        /// Path the editor was given.
        path: String,
        /// Command the path was appended to.
        command: String,
        /// How the editor exited.
        status: ExitStatus,
    },
    /// The editor could not be started.
    LaunchFailed {
        /// Full command line that was attempted.
        command_line: String,
        /// Why it could not be started.
        error: LaunchError,
    },
}

impl Outcome {
    /// Only a failure to launch counts as failure; a cancelled run or an
    /// editor exiting non-zero does not.
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::LaunchFailed { .. })
    }

    /// Text shown to the user once the run is over. Only an editor that
    /// exited cleanly is reported as `Edited`.
    pub fn message(&self) -> String {
        match self {
            Self::Cancelled => String::new(),
            Self::Edited { path, command, status } => match status.code() {
                _ if status.success() => format!("> Edited {path} with {command}."),
                Some(code) => format!("> {command} exited with status {code} on {path}."),
                None => format!("> {command} was killed by a signal on {path}."),
            },
            Self::LaunchFailed { command_line, error } => {
                format!("> Error running {command_line}:\n{error}")
            }
        }
    }

    /// Whether [`Self::message`] belongs on stdout rather than stderr.
    pub fn is_clean(&self) -> bool {
        match self {
            Self::Cancelled => true,
            Self::Edited { status, .. } => status.success(),
            Self::LaunchFailed { .. } => false,
        }
    }
}

/// Resolve `request` against `config`, prompting on `console`, then run the
/// editor through `launcher`.
pub fn edit<C, L>(
    request: &Request,
    config: &Configuration,
    console: &mut C,
    launcher: &mut L,
    default_editor: &str,
) -> Outcome
where
    C: Console + ?Sized,
    L: Launcher + ?Sized,
{
    let resolved = Resolver::new(config, console, default_editor).resolve(&request.file, &request.tool);
    let Some(resolution) = resolved else {
        return Outcome::Cancelled;
    };

    let command_line = opener::command_line(&resolution.command, &resolution.path);
    log::debug!("running {command_line}");
    match opener::open_in_editor(launcher, &resolution.command, &resolution.path) {
        Ok(status) => Outcome::Edited {
            path: resolution.path,
            command: resolution.command,
            status,
        },
        Err(error) => Outcome::LaunchFailed {
            command_line,
            error,
        },
    }
}
