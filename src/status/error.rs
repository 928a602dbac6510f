//! Status store errors
//!
//! Every variant means "status unknown". Callers fail closed: an item whose
//! status cannot be read never gets a marker.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    /// Item name has no characters left once whitespace is stripped
    #[error("cannot build a donation key from item name {0:?}")]
    InvalidKey(String),

    /// The backing store was never loaded or has gone away
    #[error("status store unavailable: {}", .0.display())]
    Unavailable(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed status store: {0}")]
    Malformed(#[from] serde_json::Error),
}
