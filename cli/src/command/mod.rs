use clap::Subcommand;

use super::ENV;

pub mod languages;
pub mod run;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a source file with the toolchain for its language.
    Run(run::RunArgs),
    /// List supported languages.
    Languages,
}

pub fn handle_command(cmd: Command) -> anyhow::Result<()> {
    // Values from `.config.env` take precedence over the built-in defaults.
    coderun_config::load_env_file(&coderun_config::config_env_path())?;
    dotenvy::from_read(ENV.as_bytes())?;

    match cmd {
        Command::Run(args) => run::handle_command(args),
        Command::Languages => languages::handle_command(),
    }
}
