use std::{path::Path, process::Command};

use crate::{RunError, LOG_TARGET};

/// Runs `command` through `<shell> -c` in `dir`, inheriting stdio.
pub fn shell(shell: &str, dir: &Path, command: &str) -> Result<(), RunError> {
    tracing::debug!(target: LOG_TARGET, shell, dir = %dir.display(), command, "spawning");

    let status = Command::new(shell)
        .arg("-c")
        .arg(command)
        .current_dir(dir)
        .status()?;

    if !status.success() {
        return Err(RunError::CommandFailed { command: command.to_owned(), status });
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn runs_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        shell("sh", dir.path(), "touch marker").unwrap();
        assert!(dir.path().join("marker").exists());
    }

    #[test]
    fn failing_command() {
        let dir = tempfile::tempdir().unwrap();
        let err = shell("sh", dir.path(), "exit 3").unwrap_err();

        match err {
            RunError::CommandFailed { command, status } => {
                assert_eq!(command, "exit 3");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_shell() {
        let dir = tempfile::tempdir().unwrap();
        let err = shell("/nonexistent/shell", dir.path(), "true").unwrap_err();
        assert!(matches!(err, RunError::Io(_)));
    }
}
