//! Error types for the IO shell.
//!
//! Synthesis itself never fails: a method either contributes to a property
//! or is silently dropped as unrecognizable. The only recoverable errors
//! live at the boundary where class descriptions are read from disk.

use std::path::PathBuf;

/// Errors reading or writing class-description files.
#[derive(Debug, thiserror::Error)]
pub enum PropmapError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid class description in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
