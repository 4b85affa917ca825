use crate::config::ConfigError;
use crate::http::ServerError;

/// Fatal startup errors. Any of these ends the process with a non-zero exit.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
