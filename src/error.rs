//! Error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown color: {0:?}")]
    UnknownColor(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
