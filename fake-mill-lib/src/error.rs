use thiserror::Error;

/// Errors that can occur while starting or running the service
#[derive(Error, Debug)]
pub enum FakeMillError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FakeMillError>;
