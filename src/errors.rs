// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StakerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The generated secret failed a length or character-class check.
    ///
    /// This means the RNG or hex encoder is broken; the secret contract
    /// cannot be trusted, so callers must not retry.
    #[error("JWT secret invariant violated: {0}")]
    SecretInvariant(&'static str),

    #[error("failed to write JWT secret to '{}': {source}", .path.display())]
    WriteSecret {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The child process ran and exited non-zero. All of its output has
    /// already been relayed by the time this is returned.
    #[error("command '{command}' exited with code {code}")]
    ProcessFailed { command: String, code: i32 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, StakerError>;
