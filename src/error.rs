//! Errors for the sources the banner reads.
//!
//! None of these reach the user as failures: each component recovers to a
//! default and uses the error to decide which diagnostic to print.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file '{path}' not found")]
    NotFound { path: PathBuf },

    #[error("Error decoding the config file '{path}'")]
    Decode { path: PathBuf },

    #[error("Invalid JSON config '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("Pywal colors file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("{message} at line {line} column {column}")]
    Malformed {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Theme is missing slot '{0}'")]
    MissingSlot(String),

    #[error("Failed to read theme cache: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PaletteError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json appends " at line X column Y" to Display; keep the bare message.
        let full = e.to_string();
        let message = match full.rfind(" at line ") {
            Some(idx) => full[..idx].to_string(),
            None => full,
        };
        PaletteError::Malformed {
            message,
            line: e.line(),
            column: e.column(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    #[error("The ASCII art file '{path}' was not found")]
    NotFound { path: PathBuf },

    #[error("Failed to read ASCII art '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
