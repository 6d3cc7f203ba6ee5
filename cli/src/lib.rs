//! # coderun
//!
//! Runs a source file with the toolchain for its language.
//!
//! ## Usage
//! ```sh
//! coderun run hello.cpp            # g++ "hello.cpp" -o hello && ./hello
//! coderun run --dry-run main.rs    # print the command instead of running it
//! coderun languages                # list supported languages
//! ```
//!
//! Commands run through `sh -c` in the file's directory. Set
//! `CODERUN_RUNNER_SHELL` or `CODERUN_RUNNER_WORKSPACE` (or put them in
//! `.config.env`) to change either.

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod command;
pub mod error;
pub mod language;

mod utils;

pub use error::RunError;
pub use language::Language;

pub const LOG_TARGET: &str = "coderun";

#[derive(Debug, Parser)]
#[command(name = "coderun", bin_name = "coderun")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: command::Command,
}

pub fn setup_logger() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default()
}

/// Default environment variables for the runner configuration.
const ENV: &str = r#"
CODERUN_RUNNER_SHELL=sh
"#;
