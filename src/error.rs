use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by document I/O.
///
/// Malformed transcript content is never an error: the pipeline degrades to
/// best-effort output instead. Only the filesystem boundary can fail.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read document {path:?}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write document {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
