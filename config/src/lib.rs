use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

mod error;

pub mod runner;

pub use error::Error;
pub use runner::RunnerConfig;

const CONFIG_ENV_PREFIX: &str = "CODERUN";
const CONFIG_ENV_FILE: &str = ".config.env";

pub trait Config: DeserializeOwned {
    const PREFIX: &'static str;

    /// Reads `CODERUN_<PREFIX>_*` variables, after loading `.config.env` from the
    /// current directory if one exists.
    fn from_env() -> Result<Self, Error> {
        load_env_file(&config_env_path())?;
        Self::from_env_vars()
    }

    /// Same as [`Config::from_env`], without touching the env file.
    fn from_env_vars() -> Result<Self, Error> {
        let prefix = format!("{}_{}", CONFIG_ENV_PREFIX, Self::PREFIX);

        Ok(config::Config::builder()
            .add_source(config::Environment::with_prefix(&prefix).separator("_"))
            .build()?
            .try_deserialize()?)
    }
}

/// Loads `path` into the process environment. Variables that are already set win.
pub fn load_env_file(path: &Path) -> Result<(), Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(()),
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

#[doc(hidden)]
pub fn config_env_path() -> PathBuf {
    Path::new(".").join(CONFIG_ENV_FILE)
}
