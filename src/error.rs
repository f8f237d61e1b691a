//! Errors raised at the edges of the game (settings files, input names).
//!
//! State transitions themselves cannot fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read settings from {path}")]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write settings to {path}")]
    WriteSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings JSON")]
    ParseSettings(#[from] serde_json::Error),

    #[error("unknown input name `{0}`")]
    UnknownInput(String),

    #[error("unknown direction `{0}`")]
    UnknownDirection(String),
}

pub type Result<T> = std::result::Result<T, Error>;
