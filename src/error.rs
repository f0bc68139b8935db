use shardline_core::RestoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Restore error: {0}")]
    Restore(#[from] RestoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization/Deserialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
