use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use coderun_config::{Config, RunnerConfig};

use crate::{utils::shell, Language, RunError, LOG_TARGET};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Source file to run.
    pub file: PathBuf,

    /// Language id, detected from the file extension by default.
    #[arg(short, long, value_name = "ID")]
    pub language: Option<String>,

    /// Working directory. Defaults to the configured workspace, then the file's directory.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Print the command instead of running it.
    #[arg(long)]
    pub dry_run: bool,
}

pub fn handle_command(args: RunArgs) -> anyhow::Result<()> {
    let RunArgs { file, language, cwd, dry_run } = args;
    // `.config.env` is already loaded by the command dispatcher.
    let config =
        RunnerConfig::from_env_vars().context("failed to load runner configuration")?;

    // An empty workspace variable counts as unset.
    let workspace = config.workspace.clone().filter(|dir| !dir.as_os_str().is_empty());
    let plan = RunPlan::new(&file, language.as_deref(), cwd.or(workspace))?;
    tracing::info!(
        target: LOG_TARGET,
        language = plan.language.id(),
        cwd = %plan.cwd.display(),
        "Generated command: {}",
        plan.command,
    );

    if dry_run {
        println!("{}", plan.command);
        return Ok(());
    }

    println!("Running {} file...", plan.language);
    shell(&config.shell, &plan.cwd, &plan.command)?;

    Ok(())
}

/// What to run and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub language: Language,
    pub cwd: PathBuf,
    pub command: String,
}

impl RunPlan {
    /// Resolves the language and working directory for `file`.
    ///
    /// The command names the file relative to `cwd` when `cwd` is its parent
    /// directory, and by absolute path otherwise.
    pub fn new(
        file: &Path,
        language: Option<&str>,
        cwd: Option<PathBuf>,
    ) -> Result<Self, RunError> {
        let file = match file.canonicalize() {
            Ok(path) if path.is_file() => path,
            Ok(_) => return Err(RunError::FileNotFound(file.into())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(RunError::FileNotFound(file.into()))
            }
            Err(err) => return Err(err.into()),
        };

        let language = match language {
            Some(id) => {
                Language::from_id(id).ok_or_else(|| RunError::UnsupportedLanguage(id.into()))?
            }
            None => Language::detect(&file).ok_or_else(|| {
                let ext = file.extension().map(|ext| ext.to_string_lossy().into_owned());
                RunError::UnsupportedLanguage(ext.unwrap_or_else(|| "unknown".into()))
            })?,
        };

        // Canonical paths always have a parent and a file name.
        let parent = file.parent().unwrap_or_else(|| Path::new("/")).to_path_buf();
        let cwd = match cwd {
            Some(dir) => match dir.canonicalize() {
                Ok(path) if path.is_dir() => path,
                _ => return Err(RunError::InvalidWorkspace(dir)),
            },
            None => parent.clone(),
        };

        let file_arg = if cwd == parent {
            file.file_name().unwrap_or_default().to_string_lossy().into_owned()
        } else {
            file.to_string_lossy().into_owned()
        };
        let stem = file.file_stem().unwrap_or_default().to_string_lossy();
        let command = language.run_command(&file_arg, &stem);

        Ok(Self { language, cwd, command })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn source(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn plan_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file = source(dir.path(), "test_hello.cpp");

        let plan = RunPlan::new(&file, None, None).unwrap();
        assert_eq!(plan.language, Language::Cpp);
        assert_eq!(plan.cwd, dir.path().canonicalize().unwrap());
        assert_eq!(plan.command, r#"g++ "test_hello.cpp" -o "test_hello" && ./"test_hello""#);
    }

    #[test]
    fn explicit_language_wins() {
        let dir = tempfile::tempdir().unwrap();
        let file = source(dir.path(), "script.txt");

        let plan = RunPlan::new(&file, Some("python"), None).unwrap();
        assert_eq!(plan.language, Language::Python);
        assert_eq!(plan.command, r#"python3 "script.txt""#);
    }

    #[test]
    fn other_cwd_uses_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let work = tempfile::tempdir().unwrap();
        let file = source(dir.path(), "main.rs");

        let plan = RunPlan::new(&file, None, Some(work.path().into())).unwrap();
        let abs = file.canonicalize().unwrap();
        assert_eq!(plan.cwd, work.path().canonicalize().unwrap());
        assert_eq!(plan.command, format!("rustc \"{}\" -o \"main\" && ./\"main\"", abs.display()));
    }

    #[test]
    fn unsupported_language() {
        let dir = tempfile::tempdir().unwrap();
        let file = source(dir.path(), "notes.txt");

        let err = RunPlan::new(&file, None, None).unwrap_err();
        assert_eq!(err.to_string(), "language txt is not supported");

        let err = RunPlan::new(&file, Some("cobol"), None).unwrap_err();
        assert_eq!(err.to_string(), "language cobol is not supported");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RunPlan::new(&dir.path().join("absent.py"), None, None).unwrap_err();
        assert!(matches!(err, RunError::FileNotFound(_)));

        let err = RunPlan::new(dir.path(), Some("python"), None).unwrap_err();
        assert!(matches!(err, RunError::FileNotFound(_)));
    }

    #[test]
    fn missing_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = source(dir.path(), "hello.py");
        let absent = dir.path().join("absent");

        let err = RunPlan::new(&file, None, Some(absent.clone())).unwrap_err();
        assert!(matches!(&err, RunError::InvalidWorkspace(path) if *path == absent));
        assert!(err.to_string().contains(&absent.display().to_string()));
    }

    #[test]
    fn file_as_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = source(dir.path(), "hello.py");

        let err = RunPlan::new(&file, None, Some(file.clone())).unwrap_err();
        assert!(matches!(&err, RunError::InvalidWorkspace(path) if *path == file));
    }
}
