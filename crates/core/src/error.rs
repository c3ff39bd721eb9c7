use std::io;
use std::path::PathBuf;

use crate::types::Namespace;

/// Errors that can occur during block discovery and command preparation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{namespace} directory `{}` could not be read: {source}", .path.display())]
    MissingDirectory {
        namespace: Namespace,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid block pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("block name cannot be empty")]
    EmptyBlockName,

    #[error("invalid {what} name `{name}`: {reason}")]
    InvalidName {
        what: &'static str,
        name: String,
        reason: String,
    },

    #[error("no block named `{0}` in the current module")]
    BlockNotFound(String),

    #[error("no GNU Radio module found at or above `{}`", .0.display())]
    ModuleNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for grmod operations
pub type Result<T> = std::result::Result<T, Error>;
