use std::{io, path::PathBuf, process::ExitStatus};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("working directory is not a directory: {}", .0.display())]
    InvalidWorkspace(PathBuf),

    #[error("language {0} is not supported")]
    UnsupportedLanguage(String),

    #[error("`{command}` didn't exit successfully: {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error(transparent)]
    Io(#[from] io::Error),
}
