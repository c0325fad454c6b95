use std::process::ExitStatus;

use super::{LaunchError, Launcher};

#[cfg(unix)]
pub(crate) fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub(crate) fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code.unsigned_abs())
}

/// Records every argv instead of spawning, and exits with `code`.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) calls: Vec<Vec<String>>,
    pub(crate) code: i32,
    /// Fail every launch as if the program did not exist.
    pub(crate) missing: bool,
}

impl Recorder {
    pub(crate) fn exiting(code: i32) -> Self {
        Self {
            code,
            ..Self::default()
        }
    }

    pub(crate) fn missing() -> Self {
        Self {
            missing: true,
            ..Self::default()
        }
    }
}

impl Launcher for Recorder {
    fn launch(&mut self, argv: &[String]) -> Result<ExitStatus, LaunchError> {
        self.calls.push(argv.to_vec());
        if self.missing {
            return Err(LaunchError::Spawn {
                program: argv.first().cloned().unwrap_or_default(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        Ok(exit_status(self.code))
    }
}
