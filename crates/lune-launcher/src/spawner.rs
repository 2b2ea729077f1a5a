//! Process spawning
//!
//! [`SystemSpawner`] starts real processes; [`DryRunSpawner`] only records
//! what would have been started.

use std::io;
use std::process::{Command, Stdio};

use lune_platform::OsFamily;
use parking_lot::Mutex;

use crate::command::LaunchCommand;

pub trait ProcessSpawner: Send + Sync {
    /// Start `command` without waiting for it. Only spawn-level failures are
    /// reported; the child's exit status is never observed.
    fn spawn(&self, command: &LaunchCommand, os: OsFamily) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl SystemSpawner {
    fn build(command: &LaunchCommand, os: OsFamily) -> io::Result<Command> {
        match os {
            // `start` is a cmd built-in and `code` ships as a .cmd shim
            OsFamily::Windows => {
                let mut cmd = Command::new("cmd");
                cmd.arg("/C").arg(command.program).args(command.args);

                #[cfg(windows)]
                {
                    use std::os::windows::process::CommandExt;
                    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
                    cmd.creation_flags(CREATE_NO_WINDOW);
                }

                Ok(cmd)
            }
            OsFamily::MacOs | OsFamily::Linux => {
                let program = which::which(command.program).map_err(|e| {
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("{} not found on PATH: {}", command.program, e),
                    )
                })?;

                let mut cmd = Command::new(program);
                cmd.args(command.args);
                Ok(cmd)
            }
        }
    }
}

impl ProcessSpawner for SystemSpawner {
    fn spawn(&self, command: &LaunchCommand, os: OsFamily) -> io::Result<()> {
        let mut child = Self::build(command, os)?
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let pid = child.id();
        tracing::debug!(pid, command = %command, "Spawned process");

        // Reap in the background so the child never lingers as a zombie.
        let reaper = std::thread::Builder::new()
            .name(format!("lune-reap-{pid}"))
            .spawn(move || {
                let _ = child.wait();
            });
        if let Err(e) = reaper {
            tracing::warn!(pid, error = %e, "Could not start reaper thread");
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRecord {
    pub os: OsFamily,
    pub command: String,
}

/// Records launches instead of performing them.
#[derive(Debug, Default)]
pub struct DryRunSpawner {
    records: Mutex<Vec<SpawnRecord>>,
    failure: Option<String>,
}

impl DryRunSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A spawner whose every launch fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            failure: Some(reason.into()),
        }
    }

    pub fn records(&self) -> Vec<SpawnRecord> {
        self.records.lock().clone()
    }
}

impl ProcessSpawner for DryRunSpawner {
    fn spawn(&self, command: &LaunchCommand, os: OsFamily) -> io::Result<()> {
        if let Some(reason) = &self.failure {
            return Err(io::Error::new(io::ErrorKind::NotFound, reason.clone()));
        }

        self.records.lock().push(SpawnRecord {
            os,
            command: command.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_records() {
        let spawner = DryRunSpawner::new();
        spawner
            .spawn(&LaunchCommand::bare("calc"), OsFamily::Windows)
            .unwrap();

        assert_eq!(
            spawner.records(),
            vec![SpawnRecord {
                os: OsFamily::Windows,
                command: "calc".to_string(),
            }]
        );
    }

    #[test]
    fn test_failing_dry_run_records_nothing() {
        let spawner = DryRunSpawner::failing("boom");
        let err = spawner
            .spawn(&LaunchCommand::bare("calc"), OsFamily::Linux)
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert!(spawner.records().is_empty());
    }

    #[test]
    fn test_windows_goes_through_cmd() {
        let cmd = SystemSpawner::build(&LaunchCommand::new("start", &["chrome"]), OsFamily::Windows)
            .unwrap();
        assert_eq!(cmd.get_program(), "cmd");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["/C", "start", "chrome"]);
    }

    #[test]
    fn test_missing_program_is_not_found() {
        let err = SystemSpawner::build(
            &LaunchCommand::bare("lune-definitely-not-installed"),
            OsFamily::Linux,
        )
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
