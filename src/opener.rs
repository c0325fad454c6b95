//! Launching the editor.

use std::process::{Command, ExitStatus};

#[cfg(test)]
pub(crate) mod testing;


/// Reasons an editor command could not be started.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// Unbalanced quotes or a dangling escape.
    #[error("Command could not be parsed: {0}")]
    Unparsable(String),
    /// Nothing left to run after splitting.
    #[error("Empty command")]
    Empty,
    /// The program could not be spawned or waited on.
    #[error("{source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Error reported by the operating system.
        #[source]
        source: std::io::Error,
    },
}

/// Runs an argument vector as a child process.
pub trait Launcher {
    /// Start `argv[0]` with the remaining arguments and wait for it to exit.
    fn launch(&mut self, argv: &[String]) -> Result<ExitStatus, LaunchError>;
}

/// Spawns real processes that share the terminal with `edd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&mut self, argv: &[String]) -> Result<ExitStatus, LaunchError> {
        let (program, args) = argv.split_first().ok_or(LaunchError::Empty)?;
        log::debug!("spawning {program} {args:?}");
        Command::new(program)
            .args(args)
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: program.clone(),
                source,
            })
    }
}

/// The editor command followed by the path, separated by one space.
pub fn command_line(command: &str, path: &str) -> String {
    format!("{command} {path}")
}

/// Split a command line into arguments, honouring shell-style quoting.
pub fn split_command_line(command_line: &str) -> Result<Vec<String>, LaunchError> {
    let argv = shlex::split(command_line)
        .ok_or_else(|| LaunchError::Unparsable(command_line.to_string()))?;
    if argv.is_empty() {
        return Err(LaunchError::Empty);
    }
    Ok(argv)
}

/// Open `path` with `command` and wait for the editor to exit.
pub fn open_in_editor<L: Launcher + ?Sized>(
    launcher: &mut L,
    command: &str,
    path: &str,
) -> Result<ExitStatus, LaunchError> {
    let argv = split_command_line(&command_line(command, path))?;
    launcher.launch(&argv)
}
