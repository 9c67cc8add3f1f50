// src/error.rs
//! Whole-run failures.
//!
//! Anything that surfaces here ends the run: the page could not be fetched,
//! the output file could not be written or read back, or its JSON did not
//! parse. Malformed table rows never reach this type; the row interpreter
//! drops them and the runner only counts them.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Building the client or sending the GET failed. Non-2xx statuses are not errors.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding the mapping or decoding a file during cleanup.
    #[error("{}: invalid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Usage(String),
}

impl Error {
    pub fn http(url: &str, source: reqwest::Error) -> Self {
        Error::Http { url: s!(url), source }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io { path: path.to_path_buf(), source }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        Error::Json { path: path.to_path_buf(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
