use std::path::PathBuf;

use serde::Deserialize;

use super::Config;

/// How `coderun run` executes generated commands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunnerConfig {
    /// Invoked as `<shell> -c <command>`.
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Working directory for every run. The file's parent directory when unset.
    #[serde(default)]
    pub workspace: Option<PathBuf>,
}

fn default_shell() -> String {
    "sh".into()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { shell: default_shell(), workspace: None }
    }
}

impl Config for RunnerConfig {
    const PREFIX: &'static str = "RUNNER";
}
