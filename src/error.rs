// src/error.rs
use dirwatch_engine::config::WatchConfigBuilderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] WatchConfigBuilderError),

    #[error("Failed to install signal handling: {0}")]
    Signal(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
