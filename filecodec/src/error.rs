use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::MAX_CHUNK_SIZE;

/// Result type specialized for codec operations.
pub type Result<T, E = CodecError> = std::result::Result<T, E>;

/// Errors that can arise while converting bytes to polynomials and back.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("chunk size must be between 1 and {} bytes", MAX_CHUNK_SIZE)]
    InvalidChunkSize,
    #[error(
        "coefficient {index} needs {width} bytes but chunks hold {chunk_size}"
    )]
    CoefficientTooWide {
        index: usize,
        width: usize,
        chunk_size: usize,
    },
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    #[error("i/o failure on {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CodecError {
    pub(crate) fn file(path: &Path, source: io::Error) -> Self {
        CodecError::File {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attach `path` to a bare I/O failure.
    pub(crate) fn at_path(self, path: &Path) -> Self {
        match self {
            CodecError::Io(source) => Self::file(path, source),
            other => other,
        }
    }
}
