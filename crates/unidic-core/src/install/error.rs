//! Error types for the install pipeline.

use std::path::PathBuf;

use crate::archive::{CorruptArchiveError, ExtractionError};
use crate::retry::TransferError;

/// Why one fetch + validate attempt did not produce a usable archive.
#[derive(Debug, thiserror::Error)]
pub enum AttemptError {
    #[error("download failed: {0}")]
    Transfer(#[from] TransferError),
    #[error("downloaded file is corrupt: {0}")]
    Corrupt(#[from] CorruptArchiveError),
}

/// The archive did not unpack into the expected top-level directory.
#[derive(Debug, thiserror::Error)]
#[error("extracted directory not found: {}", .expected.display())]
pub struct LayoutError {
    pub expected: PathBuf,
}

/// Fatal install failure.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("failed to download a valid archive after {attempts} attempts")]
    AttemptsExhausted {
        attempts: u32,
        #[source]
        last: AttemptError,
    },
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("cannot update {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InstallError {
    pub(crate) fn io(path: &std::path::Path) -> impl FnOnce(std::io::Error) -> InstallError + '_ {
        move |source| InstallError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
