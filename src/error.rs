use thiserror::Error;

/// Errors that stop the application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot watch message file: {0}")]
    Watch(#[from] notify::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}
