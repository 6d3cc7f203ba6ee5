#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to read env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}
