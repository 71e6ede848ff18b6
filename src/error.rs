use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RijnError {
    #[error("could not open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed ciphertext: length {0} is not a positive multiple of 16")]
    MalformedCiphertext(u64),

    #[error("Unexpected end of file inside a 16-byte block")]
    ShortRead,

    #[error("Length trailer claims {trailer} bytes but only {available} were decrypted")]
    InvalidTrailer { trailer: u64, available: u64 },

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, RijnError>;
